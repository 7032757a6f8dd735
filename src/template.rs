//! Positional template expansion for translated strings.

use std::fmt::Display;

use crate::error::FormatError;

/// Expand `{0}`-style positional placeholders in a template.
///
/// `{{` and `}}` are literal braces. A placeholder referencing an argument
/// index that was not supplied is an error, never silently dropped.
///
/// # Examples
/// ```
/// use custom_localizer::template::expand;
///
/// let greeting = expand("Hello {0}, it is {1}", &[&"world", &42]).unwrap();
/// assert_eq!(greeting, "Hello world, it is 42");
/// ```
///
/// # Errors
/// - [`FormatError::ArgumentMismatch`] when a placeholder index is out of range
/// - [`FormatError::InvalidPlaceholder`] when a placeholder is not a plain index
/// - [`FormatError::UnbalancedBrace`] when a brace is left open or unescaped
pub fn expand(template: &str, args: &[&dyn Display]) -> Result<String, FormatError> {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '{' => {
                if chars.peek() == Some(&'{') {
                    chars.next();
                    out.push('{');
                    continue;
                }

                let mut placeholder = String::new();
                loop {
                    match chars.next() {
                        Some('}') => break,
                        Some(c) => placeholder.push(c),
                        None => return Err(FormatError::UnbalancedBrace),
                    }
                }

                let index: usize = placeholder
                    .parse()
                    .map_err(|_| FormatError::InvalidPlaceholder(placeholder.clone()))?;
                let arg = args.get(index).ok_or(FormatError::ArgumentMismatch {
                    index,
                    supplied: args.len(),
                })?;
                out.push_str(&arg.to_string());
            }
            '}' => {
                if chars.peek() == Some(&'}') {
                    chars.next();
                    out.push('}');
                } else {
                    return Err(FormatError::UnbalancedBrace);
                }
            }
            _ => out.push(ch),
        }
    }

    Ok(out)
}
