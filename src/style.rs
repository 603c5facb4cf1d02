//! Terminal styling for log lines and demo output.
//!
//! `e*` helpers target **stderr** (where [`CookbookLogger`](crate::logger::CookbookLogger)
//! writes) and `n*` helpers target **stdout** (where the demos print their
//! results). Each one drops the colour when its stream is not a colour terminal
//! or `NO_COLOR` is set.
//!
//! ```rust
//! use cookbook::style::{ecyan, nbold};
//!
//! eprintln!("{} building vehicles", ecyan("INFO"));
//! println!("{}", nbold("Same instance? true"));
//! ```

use console::{StyledObject, style};

/// Creates a [`StyledObject`] configured for stderr output.
pub fn estyle<D>(val: D) -> StyledObject<D> {
    style(val).for_stderr()
}

/// Cyan, for stderr.
pub fn ecyan<D>(val: D) -> StyledObject<D> {
    estyle(val).cyan()
}

/// Yellow, for stderr.
pub fn eyellow<D>(val: D) -> StyledObject<D> {
    estyle(val).yellow()
}

/// Red, for stderr.
pub fn ered<D>(val: D) -> StyledObject<D> {
    estyle(val).red()
}

/// Dim, for stderr.
pub fn edim<D>(val: D) -> StyledObject<D> {
    estyle(val).dim()
}

/// Creates a [`StyledObject`] configured for stdout output.
pub fn nstyle<D>(val: D) -> StyledObject<D> {
    style(val).for_stdout()
}

/// Green, for stdout.
pub fn ngreen<D>(val: D) -> StyledObject<D> {
    nstyle(val).green()
}

/// Bold, for stdout.
pub fn nbold<D>(val: D) -> StyledObject<D> {
    nstyle(val).bold()
}

/// Dim, for stdout.
pub fn ndim<D>(val: D) -> StyledObject<D> {
    nstyle(val).dim()
}

/// Renders a demo section heading such as `--- Builder ---`.
pub fn heading(title: &str) -> String {
    nbold(format!("--- {title} ---")).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stderr_helpers_keep_text() {
        assert!(ecyan("test").to_string().contains("test"));
        assert!(eyellow("test").to_string().contains("test"));
        assert!(ered("test").to_string().contains("test"));
        assert!(edim("test").to_string().contains("test"));
    }

    #[test]
    fn test_stdout_helpers_keep_text() {
        assert!(ngreen("test").to_string().contains("test"));
        assert!(nbold("test").to_string().contains("test"));
        assert!(ndim(42).to_string().contains("42"));
    }

    #[test]
    fn test_heading() {
        let heading = heading("Strategy");
        assert!(heading.contains("--- Strategy ---"));
    }
}
