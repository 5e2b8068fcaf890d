//! Symbol substitution inside attribute type text.

use std::collections::HashMap;

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

/// Nesting that changes how characters are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scope {
    /// Object type body, where `key:` names a property.
    Braces,
    /// Literal text of a template literal type.
    Template,
    /// `${ ... }` inside a template literal.
    Placeholder,
}

/// Whether `rest` starts with a property type annotation.
fn starts_annotation(rest: &str) -> bool {
    let rest = rest.trim_start();
    rest.starts_with(':') || rest.starts_with("?:")
}

/// Replace whole identifiers in `text` according to `bindings`.
///
/// Identifiers inside string literals, property accesses after `.` and
/// property keys of object types are left alone, so `Foo.Foo` with
/// `Foo -> Foo2` becomes `Foo2.Foo` and `{ Foo: Foo }` becomes
/// `{ Foo: Foo2 }`. Placeholders of template literal types are rewritten.
pub fn rewrite_identifiers(text: &str, bindings: &HashMap<String, String>) -> String {
    if bindings.iter().all(|(local, bound)| local == bound) {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut chars = text.char_indices().peekable();
    let mut scopes: Vec<Scope> = Vec::new();
    let mut quote: Option<char> = None;
    let mut after_dot = false;
    let mut key_position = false;

    while let Some((start, c)) = chars.next() {
        if let Some(q) = quote {
            out.push(c);
            if c == '\\' {
                if let Some((_, escaped)) = chars.next() {
                    out.push(escaped);
                }
            } else if c == q {
                quote = None;
            }
            continue;
        }

        if scopes.last() == Some(&Scope::Template) {
            out.push(c);
            match c {
                '\\' => {
                    if let Some((_, escaped)) = chars.next() {
                        out.push(escaped);
                    }
                }
                '`' => {
                    scopes.pop();
                }
                '$' if chars.peek().is_some_and(|&(_, next)| next == '{') => {
                    chars.next();
                    out.push('{');
                    scopes.push(Scope::Placeholder);
                    after_dot = false;
                    key_position = false;
                }
                _ => {}
            }
            continue;
        }

        if is_ident_start(c) {
            let mut end = start + c.len_utf8();
            while let Some(&(idx, next)) = chars.peek() {
                if !is_ident_continue(next) {
                    break;
                }
                end = idx + next.len_utf8();
                chars.next();
            }
            let ident = &text[start..end];
            let is_key = key_position && starts_annotation(&text[end..]);
            match bindings.get(ident) {
                Some(bound) if !after_dot && !is_key => out.push_str(bound),
                _ => out.push_str(ident),
            }
            after_dot = false;
            key_position = key_position && ident == "readonly";
            continue;
        }

        match c {
            '\'' | '"' => quote = Some(c),
            '`' => scopes.push(Scope::Template),
            '{' => scopes.push(Scope::Braces),
            '}' => {
                if matches!(scopes.last(), Some(Scope::Braces | Scope::Placeholder)) {
                    scopes.pop();
                }
            }
            _ => {}
        }
        if !c.is_whitespace() {
            after_dot = c == '.';
            key_position = match c {
                '{' => true,
                ';' | ',' => scopes.last() == Some(&Scope::Braces),
                _ => false,
            };
        }
        out.push(c);
    }

    out
}
