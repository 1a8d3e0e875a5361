//! Exit code constants for the jotter CLI.
//!
//! - 0: Success
//! - 1: User error (bad command, out-of-range index, wrong task kind)
//! - 2: Storage failure (`exec` changed the list but could not save it)
//! - 3: Config failure (unreadable or invalid config file)
//! - 4: I/O failure (terminal input or output broke)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad command syntax, invalid index, or invalid schedule.
pub const USER_ERROR: i32 = 1;

/// Storage failure: a one-shot command's change could not be written.
///
/// The interactive shell reports storage failures inline and keeps going.
pub const STORAGE_FAILURE: i32 = 2;

/// Config failure: the config file could not be read, parsed, or validated.
pub const CONFIG_FAILURE: i32 = 3;

/// I/O failure: writing responses to the terminal failed.
pub const IO_FAILURE: i32 = 4;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [
            SUCCESS,
            USER_ERROR,
            STORAGE_FAILURE,
            CONFIG_FAILURE,
            IO_FAILURE,
        ];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn success_is_zero() {
        assert_eq!(SUCCESS, 0);
    }
}
