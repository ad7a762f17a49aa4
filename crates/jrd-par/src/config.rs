//! Parser configuration: the spec's §6 configuration table plus the §9
//! Open-Question flags resolved in DESIGN.md. A builder in the vein of
//! `faxc-drv::Config`, sized for three booleans rather than a full
//! compiler's option set.

#[derive(Debug, Clone, Copy)]
pub struct ParserConfig {
    /// When `true`, `, }` and `, ]` are accepted silently. Default `false`.
    pub allow_trailing_comma: bool,
    /// When `true`, the error report renders every diagnostic; when
    /// `false`, only the first. Default `true`.
    pub throw_all_errors: bool,
    /// When `true`, a top-level scalar (not an object or array) is
    /// accepted. Default `false` (strict JSON-reader behavior; RFC 8259
    /// itself permits bare scalars). See DESIGN.md Open Question 5.
    pub allow_bare_scalar: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self { allow_trailing_comma: false, throw_all_errors: true, allow_bare_scalar: false }
    }
}

impl ParserConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allow_trailing_comma(mut self, allow: bool) -> Self {
        self.allow_trailing_comma = allow;
        self
    }

    pub fn throw_all_errors(mut self, throw_all: bool) -> Self {
        self.throw_all_errors = throw_all;
        self
    }

    pub fn allow_bare_scalar(mut self, allow: bool) -> Self {
        self.allow_bare_scalar = allow;
        self
    }
}
