// File: crates/pricetrace/src/exit.rs
// Summary: Process exit codes for typed failures found anywhere in an error chain.

use chart_core::RenderError;
use history_core::Error as HistoryError;

pub const NO_REVISIONS: u8 = 1;
pub const ALL_ITEMS_MISSING: u8 = 2;
pub const NOT_A_REPOSITORY: u8 = 3;
pub const NO_ITEMS: u8 = 4;
pub const NO_RENDERABLE_DATA: u8 = 5;
pub const INVALID_WINDOW: u8 = 6;
pub const HISTORY_ACCESS: u8 = 7;
pub const OTHER: u8 = 8;

fn history_code(err: &HistoryError) -> u8 {
    match err {
        HistoryError::NoRevisions { .. } => NO_REVISIONS,
        HistoryError::AllItemsMissing { .. } => ALL_ITEMS_MISSING,
        HistoryError::NotARepository(_) => NOT_A_REPOSITORY,
        HistoryError::NoItems => NO_ITEMS,
        HistoryError::InvalidWindow { .. } => INVALID_WINDOW,
        HistoryError::HistoryAccess(_) | HistoryError::Parse { .. } => HISTORY_ACCESS,
        HistoryError::Csv(_) | HistoryError::Io(_) => OTHER,
    }
}

pub fn exit_code(err: &anyhow::Error) -> u8 {
    for cause in err.chain() {
        if let Some(e) = cause.downcast_ref::<HistoryError>() {
            return history_code(e);
        }
        if let Some(e) = cause.downcast_ref::<RenderError>() {
            return match e {
                RenderError::NoRenderableData => NO_RENDERABLE_DATA,
                _ => OTHER,
            };
        }
    }
    OTHER
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn codes_survive_context() {
        let err = Err::<(), _>(HistoryError::NoItems).context("normalizing items").unwrap_err();
        assert_eq!(exit_code(&err), NO_ITEMS);

        let err = Err::<(), _>(RenderError::NoRenderableData).context("rendering").unwrap_err();
        assert_eq!(exit_code(&err), NO_RENDERABLE_DATA);
    }

    #[test]
    fn unknown_errors_are_other() {
        assert_eq!(exit_code(&anyhow::anyhow!("boom")), OTHER);
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk");
        assert_eq!(exit_code(&anyhow::Error::from(RenderError::Io(io))), OTHER);
    }
}
