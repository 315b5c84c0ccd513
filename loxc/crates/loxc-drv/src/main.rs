use std::process::ExitCode;

fn main() -> ExitCode {
    match loxc_drv::main() {
        Ok(status) => status.into(),
        Err(e) => {
            eprintln!("error: {}", e);
            e.status().into()
        },
    }
}
