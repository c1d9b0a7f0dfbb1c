//! Process exit handling: terminal restore on every exit path and core-dump
//! suppression so a displayed password can't end up in a dump.

/// Put the tty back in cooked mode with echo, using termios directly so it is
/// safe from an atexit hook.
fn restore_termios() {
    unsafe {
        let mut termios: libc::termios = std::mem::zeroed();
        if libc::tcgetattr(0, &mut termios) == 0 {
            termios.c_oflag |= libc::OPOST | libc::ONLCR;
            termios.c_lflag |= libc::ICANON | libc::ECHO | libc::ISIG;
            libc::tcsetattr(0, libc::TCSANOW, &termios);
        }
    }
}

/// Registered with atexit: runs on `process::exit` and normal return.
extern "C" fn cleanup_on_exit() {
    restore_termios();
    const SHOW_CURSOR: &[u8] = b"\x1b[0m\x1b[?25h";
    unsafe {
        // Escape codes only make sense on a tty, not in a pipe.
        if libc::isatty(1) == 1 {
            libc::write(1, SHOW_CURSOR.as_ptr() as *const libc::c_void, SHOW_CURSOR.len());
        }
    }
}

/// Shell convention for a process ended by a signal.
fn signal_exit_code(sig: libc::c_int) -> libc::c_int {
    128 + sig
}

/// SIGINT/SIGTERM/SIGHUP: leave through `exit` so the atexit hook runs.
extern "C" fn signal_handler(sig: libc::c_int) {
    unsafe { libc::exit(signal_exit_code(sig)) }
}

/// Install signal handlers and the atexit cleanup. Call early in main().
pub fn install_handlers() {
    unsafe {
        libc::atexit(cleanup_on_exit);
        for sig in [libc::SIGINT, libc::SIGTERM, libc::SIGHUP] {
            libc::signal(sig, signal_handler as *const () as libc::sighandler_t);
        }
    }
}

/// Mark the process non-dumpable and zero the core size limit.
pub fn suppress_core_dumps() {
    unsafe {
        #[cfg(target_os = "linux")]
        libc::prctl(libc::PR_SET_DUMPABLE, 0);

        let limit = libc::rlimit {
            rlim_cur: 0,
            rlim_max: 0,
        };
        libc::setrlimit(libc::RLIMIT_CORE, &limit);
    }
}

/// Restore the tty now (startup, after a crashed previous run).
pub fn reset_terminal() {
    restore_termios();
}
