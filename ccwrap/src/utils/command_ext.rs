use std::io;

pub trait CommandExt {
    /// Hands the terminal over to the command.
    ///
    /// On unix the current process image is replaced, so this only ever
    /// returns the error that prevented it. Elsewhere the command runs as a
    /// child with inherited stdio and its exit code is returned.
    fn exec_replace(&mut self) -> io::Result<i32>;
}

impl CommandExt for std::process::Command {
    fn exec_replace(&mut self) -> io::Result<i32> {
        imp::exec_replace(self)
    }
}

#[cfg(windows)]
mod imp {
    use std::io;
    use winapi::shared::minwindef::{BOOL, DWORD, FALSE, TRUE};
    use winapi::um::consoleapi::SetConsoleCtrlHandler;

    unsafe extern "system" fn ctrlc_handler(_: DWORD) -> BOOL {
        // Do nothing; let the child process handle it.
        TRUE
    }

    pub fn exec_replace(cmd: &mut std::process::Command) -> io::Result<i32> {
        unsafe {
            if SetConsoleCtrlHandler(Some(ctrlc_handler), TRUE) == FALSE {
                return Err(io::Error::last_os_error());
            }
        }
        let status = cmd.spawn()?.wait()?;
        Ok(status.code().unwrap_or(1))
    }
}


#[cfg(unix)]
mod imp {
    use std::io;
    use std::os::unix::process::CommandExt;

    pub fn exec_replace(cmd: &mut std::process::Command) -> io::Result<i32> {
        Err(cmd.exec())
    }
}
