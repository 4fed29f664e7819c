// SPDX-License-Identifier: MIT OR Apache-2.0

//! Message template rendering used by the bundled backends.
//!
//! Templates use brace holes:
//!
//! * `{0}`, `{1}`, ... bind the argument at that position, and may repeat.
//! * `{Name}` binds the next positional argument not yet taken by a named hole, so
//!   `"{User} did {Action}"` reads its arguments left to right.
//! * Anything after `:` or `,` inside a hole (a format or alignment) is ignored, as is a
//!   leading `@` or `$`.
//! * `{{` and `}}` are literal braces.
//!
//! A hole that cannot be bound is written out verbatim.  Rendering never fails, since a
//! malformed template is the caller's concern and should still produce a readable record.

use crate::arg::LogArg;
use std::fmt::Write;

/// Renders `template` against `args`.
///
/// ```rust
/// use contextlog::{LogArg, template};
///
/// let args = [LogArg::from(3), LogArg::from("orders")];
/// assert_eq!(template::render("{0} messages in {1}", &args), "3 messages in orders");
/// assert_eq!(template::render("{Count} messages in {Queue}", &args), "3 messages in orders");
/// assert_eq!(template::render("{5} stays", &args), "{5} stays");
/// ```
pub fn render(template: &str, args: &[LogArg]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut next_named = 0;
    let mut rest = template;
    while let Some(pos) = rest.find(['{', '}']) {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        if let Some(after) = tail.strip_prefix("{{") {
            out.push('{');
            rest = after;
            continue;
        }
        if let Some(after) = tail.strip_prefix('}') {
            //a lone closing brace is kept, a doubled one collapses
            out.push('}');
            rest = after.strip_prefix('}').unwrap_or(after);
            continue;
        }
        let Some(close) = tail.find('}') else {
            out.push_str(tail);
            return out;
        };
        match bind(&tail[1..close], args, &mut next_named) {
            Some(arg) => {
                let _ = write!(out, "{}", arg);
            }
            None => out.push_str(&tail[..=close]),
        }
        rest = &tail[close + 1..];
    }
    out.push_str(rest);
    out
}

fn bind<'a>(hole: &str, args: &'a [LogArg], next_named: &mut usize) -> Option<&'a LogArg> {
    let name = hole
        .split([':', ','])
        .next()
        .unwrap_or("")
        .trim_start_matches(['@', '$']);
    if name.is_empty() {
        return None;
    }
    if name.bytes().all(|b| b.is_ascii_digit()) {
        return name.parse::<usize>().ok().and_then(|i| args.get(i));
    }
    if name.chars().all(|c| c.is_alphanumeric() || c == '_') {
        let arg = args.get(*next_named);
        *next_named += 1;
        return arg;
    }
    None
}
