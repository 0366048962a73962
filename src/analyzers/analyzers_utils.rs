/// Skips the current loop iteration on `Err`, logging the error.
#[macro_export]
macro_rules! skip_fail {
    ($res:expr) => {
        match $res {
            Ok(val) => val,
            Err(e) => {
                warn!("Skipping: {}", e);
                continue;
            }
        }
    };
}
