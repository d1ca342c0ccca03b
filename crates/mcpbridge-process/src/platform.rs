use tokio::process::Command;

/// Apply platform-specific spawn flags.
///
/// On Windows the child gets `CREATE_NO_WINDOW` so console tools do not flash a
/// window when the host is a GUI process. Other platforms need nothing.
pub fn configure_child_process_platform(cmd: &mut Command) {
    #[cfg(windows)]
    {
        const CREATE_NO_WINDOW: u32 = 0x0800_0000;
        cmd.creation_flags(CREATE_NO_WINDOW);
    }
    #[cfg(not(windows))]
    {
        let _ = cmd;
    }
}
