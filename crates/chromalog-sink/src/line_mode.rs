/// Controls whether a sink appends a trailing newline when writing
/// emissions.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LineMode {
    /// Append a newline terminator after each rendered emission.
    WithNewline,
    /// Emit the rendered emission without a trailing newline.
    WithoutNewline,
}

impl LineMode {
    /// Reports whether the mode appends a trailing newline.
    ///
    /// [`LineMode::WithNewline`] matches the console default of printing
    /// each emission on its own line. Exposing the behaviour as a method
    /// avoids requiring callers to pattern-match on the enum when they
    /// mirror the sink's newline policy elsewhere.
    ///
    /// # Examples
    ///
    /// ```
    /// use chromalog_sink::LineMode;
    ///
    /// assert!(LineMode::WithNewline.append_newline());
    /// assert!(!LineMode::WithoutNewline.append_newline());
    /// ```
    #[must_use]
    pub const fn append_newline(self) -> bool {
        matches!(self, Self::WithNewline)
    }
}

impl Default for LineMode {
    fn default() -> Self {
        Self::WithNewline
    }
}

impl From<bool> for LineMode {
    /// Converts a boolean newline flag into a [`LineMode`], `true`
    /// selecting [`LineMode::WithNewline`].
    ///
    /// # Examples
    ///
    /// ```
    /// use chromalog_sink::LineMode;
    ///
    /// assert_eq!(LineMode::from(true), LineMode::WithNewline);
    /// assert_eq!(LineMode::from(false), LineMode::WithoutNewline);
    /// ```
    fn from(append_newline: bool) -> Self {
        if append_newline {
            Self::WithNewline
        } else {
            Self::WithoutNewline
        }
    }
}

impl From<LineMode> for bool {
    /// Converts a [`LineMode`] back into a boolean newline flag via
    /// [`LineMode::append_newline`].
    fn from(mode: LineMode) -> Self {
        mode.append_newline()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_appends_newline() {
        assert_eq!(LineMode::default(), LineMode::WithNewline);
    }

    #[test]
    fn bool_conversions_round_trip() {
        for mode in [LineMode::WithNewline, LineMode::WithoutNewline] {
            assert_eq!(LineMode::from(bool::from(mode)), mode);
        }
    }
}
