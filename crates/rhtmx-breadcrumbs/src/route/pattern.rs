//! Pattern parsing for route declarations
//!
//! Pure functional parsing of `path-to-regexp` style patterns into typed
//! tokens. Parsing never fails: anything that does not form a parameter is
//! kept as static text.

/// Repetition/optionality of a parameter token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// `:id`
    Required,
    /// `:id?`
    Optional,
    /// `:path*`
    ZeroOrMore,
    /// `:path+`
    OneOrMore,
}

impl ParamKind {
    fn from_modifier(modifier: Option<char>) -> Self {
        match modifier {
            Some('?') => Self::Optional,
            Some('*') => Self::ZeroOrMore,
            Some('+') => Self::OneOrMore,
            _ => Self::Required,
        }
    }

    pub fn is_optional(self) -> bool {
        matches!(self, Self::Optional | Self::ZeroOrMore)
    }

    pub fn is_repeat(self) -> bool {
        matches!(self, Self::ZeroOrMore | Self::OneOrMore)
    }
}

/// A parameter captured from the path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamToken {
    /// Parameter name; unnamed groups and wildcards use their index (`"0"`, `"1"`, ...)
    pub name: String,
    /// Delimiter written right before the parameter (`/` or `.`), owned by it
    pub prefix: Option<char>,
    /// Character a default segment pattern stops at
    pub delimiter: char,
    pub kind: ParamKind,
    /// Parameter shares its segment with trailing static text (`/:a-suffix`)
    pub partial: bool,
    /// Written as a bare `*`
    pub asterisk: bool,
    /// Regex source for one repetition of the parameter
    pub pattern: String,
}

/// Represents a parsed pattern segment
///
/// # Examples
///
/// ```
/// use rhtmx_breadcrumbs::route::pattern::{tokenize, PatternToken};
///
/// let tokens = tokenize("/users/:id");
/// assert!(matches!(&tokens[0], PatternToken::Static(s) if s == "/users"));
/// assert!(matches!(&tokens[1], PatternToken::Param(p) if p.name == "id"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternToken {
    Static(String),
    Param(ParamToken),
}

/// A route pattern together with its tokens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    source: String,
    tokens: Vec<PatternToken>,
}

impl RoutePattern {
    /// Parses a pattern written in route syntax
    pub fn parse(source: impl Into<String>) -> Self {
        let source = source.into();
        let tokens = tokenize(&source);
        Self { source, tokens }
    }

    /// Treats the whole source as static text
    ///
    /// Used for default breadcrumbs, where a raw path must match itself even
    /// when it contains `:`, `(` or `*`.
    pub fn literal(source: impl Into<String>) -> Self {
        let source = source.into();
        let tokens = if source.is_empty() {
            Vec::new()
        } else {
            vec![PatternToken::Static(source.clone())]
        };
        Self { source, tokens }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn tokens(&self) -> &[PatternToken] {
        &self.tokens
    }

    /// Names of all parameters in declaration order
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().filter_map(|token| match token {
            PatternToken::Param(param) => Some(param.name.as_str()),
            PatternToken::Static(_) => None,
        })
    }
}

/// Splits a pattern into static text and parameter tokens (pure function)
///
/// # Parsing Rules (evaluated at each position, in order)
///
/// 1. **Escape**: `\x` adds `x` as static text
/// 2. **Named param**: `:name`, `:name(re)` with an optional `?`, `*` or `+`
/// 3. **Unnamed param**: `(re)` with an optional modifier
/// 4. **Wildcard**: `*`
/// 5. **Static**: any other character
///
/// A `/` or `.` right before a parameter becomes its prefix, which lets
/// optional parameters swallow their leading slash.
pub fn tokenize(source: &str) -> Vec<PatternToken> {
    let chars: Vec<char> = source.chars().collect();
    let mut tokens = Vec::new();
    let mut text = String::new();
    let mut unnamed = 0usize;
    let mut i = 0;

    while i < chars.len() {
        if chars[i] == '\\' && i + 1 < chars.len() {
            text.push(chars[i + 1]);
            i += 2;
            continue;
        }

        match scan_param(&chars, i) {
            Some(scan) => {
                if !text.is_empty() {
                    tokens.push(PatternToken::Static(std::mem::take(&mut text)));
                }

                let name = scan.name.unwrap_or_else(|| {
                    let name = unnamed.to_string();
                    unnamed += 1;
                    name
                });
                let delimiter = scan.prefix.unwrap_or('/');
                let next = chars.get(scan.end).copied();
                let pattern = match scan.capture {
                    Some(capture) => capture,
                    None if scan.asterisk => ".*".to_string(),
                    None => format!("[^{}]+?", regex::escape(&delimiter.to_string())),
                };

                tokens.push(PatternToken::Param(ParamToken {
                    name,
                    prefix: scan.prefix,
                    delimiter,
                    kind: ParamKind::from_modifier(scan.modifier),
                    partial: scan.prefix.is_some() && next.is_some() && next != scan.prefix,
                    asterisk: scan.asterisk,
                    pattern,
                }));
                i = scan.end;
            }
            None => {
                text.push(chars[i]);
                i += 1;
            }
        }
    }

    if !text.is_empty() {
        tokens.push(PatternToken::Static(text));
    }

    tokens
}

/// Raw result of scanning one parameter
struct ParamScan {
    prefix: Option<char>,
    name: Option<String>,
    capture: Option<String>,
    modifier: Option<char>,
    asterisk: bool,
    end: usize,
}

fn scan_param(chars: &[char], start: usize) -> Option<ParamScan> {
    let mut i = start;
    let prefix = match chars[i] {
        c @ ('/' | '.') => {
            i += 1;
            Some(c)
        }
        _ => None,
    };

    let mut scan = ParamScan {
        prefix,
        name: None,
        capture: None,
        modifier: None,
        asterisk: false,
        end: i,
    };

    match chars.get(i) {
        Some(':') => {
            let name: String = chars[i + 1..]
                .iter()
                .take_while(|c| c.is_ascii_alphanumeric() || **c == '_')
                .collect();
            if name.is_empty() {
                return None;
            }
            i += 1 + name.chars().count();
            scan.name = Some(name);

            if let Some((capture, end)) = scan_group(chars, i) {
                scan.capture = Some(capture);
                i = end;
            }
        }
        Some('(') => {
            let (capture, end) = scan_group(chars, i)?;
            scan.capture = Some(capture);
            i = end;
        }
        Some('*') => {
            scan.asterisk = true;
            scan.end = i + 1;
            return Some(scan);
        }
        _ => return None,
    }

    if let Some(&m @ ('?' | '*' | '+')) = chars.get(i) {
        scan.modifier = Some(m);
        i += 1;
    }

    scan.end = i;
    Some(scan)
}

/// Reads `(content)` starting at `start`; content may hold escapes but no parentheses
fn scan_group(chars: &[char], start: usize) -> Option<(String, usize)> {
    if chars.get(start) != Some(&'(') {
        return None;
    }

    let mut content = String::new();
    let mut i = start + 1;
    loop {
        match chars.get(i)? {
            ')' if !content.is_empty() => return Some((content, i + 1)),
            ')' | '(' => return None,
            '\\' => {
                let escaped = chars.get(i + 1)?;
                content.push('\\');
                content.push(*escaped);
                i += 2;
            }
            c => {
                content.push(*c);
                i += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn param(token: &PatternToken) -> &ParamToken {
        match token {
            PatternToken::Param(p) => p,
            PatternToken::Static(s) => panic!("expected param, got static {s:?}"),
        }
    }

    #[test]
    fn test_tokenize_static() {
        assert_eq!(
            tokenize("/about/team"),
            vec![PatternToken::Static("/about/team".to_string())]
        );
    }

    #[test]
    fn test_tokenize_required_param() {
        let tokens = tokenize("/users/:id");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0], PatternToken::Static("/users".to_string()));

        let p = param(&tokens[1]);
        assert_eq!(p.name, "id");
        assert_eq!(p.prefix, Some('/'));
        assert_eq!(p.kind, ParamKind::Required);
        assert_eq!(p.pattern, "[^/]+?");
        assert!(!p.partial);
    }

    #[test]
    fn test_tokenize_modifiers() {
        let kinds: Vec<ParamKind> = tokenize("/:a?/:b*/:c+")
            .iter()
            .map(|t| param(t).kind)
            .collect();
        assert_eq!(
            kinds,
            vec![ParamKind::Optional, ParamKind::ZeroOrMore, ParamKind::OneOrMore]
        );
    }

    #[test]
    fn test_tokenize_custom_pattern() {
        let tokens = tokenize("/posts/:id(\\d+)");
        let p = param(&tokens[1]);
        assert_eq!(p.name, "id");
        assert_eq!(p.pattern, "\\d+");
    }

    #[test]
    fn test_tokenize_unnamed_and_wildcard() {
        let tokens = tokenize("/files/(\\w+)/*");
        let group = param(&tokens[1]);
        let wildcard = param(&tokens[2]);
        assert_eq!(group.name, "0");
        assert_eq!(wildcard.name, "1");
        assert!(wildcard.asterisk);
        assert_eq!(wildcard.pattern, ".*");
    }

    #[test]
    fn test_tokenize_escape() {
        assert_eq!(
            tokenize("/a\\:b"),
            vec![PatternToken::Static("/a:b".to_string())]
        );
    }

    #[test]
    fn test_tokenize_lone_colon_is_static() {
        assert_eq!(
            tokenize("/a:/b"),
            vec![PatternToken::Static("/a:/b".to_string())]
        );
    }

    #[test]
    fn test_tokenize_partial_param() {
        let tokens = tokenize("/:name-suffix");
        let p = param(&tokens[0]);
        assert!(p.partial);
        assert_eq!(tokens[1], PatternToken::Static("-suffix".to_string()));
    }

    #[test]
    fn test_tokenize_dot_prefix() {
        let tokens = tokenize("/file.:ext");
        let p = param(&tokens[1]);
        assert_eq!(p.prefix, Some('.'));
        assert_eq!(p.delimiter, '.');
        assert_eq!(p.pattern, "[^\\.]+?");
    }

    #[test]
    fn test_literal_pattern_keeps_syntax() {
        let pattern = RoutePattern::literal("/a/:b");
        assert_eq!(pattern.param_names().count(), 0);
        assert_eq!(pattern.source(), "/a/:b");
    }

    #[test]
    fn test_param_names() {
        let pattern = RoutePattern::parse("/1/2/:number/:rest*");
        assert_eq!(pattern.param_names().collect::<Vec<_>>(), vec!["number", "rest"]);
    }
}
