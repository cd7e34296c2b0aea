//! Multi-pair string replacement.

use crate::error::WikiError;

/// Replaces several old/new pairs in one left-to-right pass.
///
/// At each position the first pair, in argument order, whose old string
/// matches wins. Replacements never overlap and inserted text is not scanned
/// again, so `a -> b, b -> a` swaps the two.
#[derive(Debug, Clone)]
pub struct Replacer<'a> {
    pairs: Vec<(&'a str, &'a str)>,
}

impl<'a> Replacer<'a> {
    /// Build from a flat `[old, new, old, new, ...]` list.
    pub fn new<S: AsRef<str>>(pairs: &'a [S]) -> Result<Self, WikiError> {
        if pairs.is_empty() || pairs.len() % 2 != 0 {
            return Err(WikiError::invalid(format!(
                "number of old/new strings to replace does not match: {}",
                pairs.len()
            )));
        }

        let pairs: Vec<(&str, &str)> = pairs
            .chunks_exact(2)
            .map(|pair| (pair[0].as_ref(), pair[1].as_ref()))
            .collect();

        if pairs.iter().any(|(old, _)| old.is_empty()) {
            return Err(WikiError::invalid("old strings must not be empty"));
        }

        Ok(Self { pairs })
    }

    pub fn replace(&self, input: &str) -> String {
        let mut output = String::with_capacity(input.len());
        let mut rest = input;

        'scan: while !rest.is_empty() {
            for (old, new) in &self.pairs {
                if let Some(tail) = rest.strip_prefix(old) {
                    output.push_str(new);
                    rest = tail;
                    continue 'scan;
                }
            }

            let mut chars = rest.chars();
            if let Some(c) = chars.next() {
                output.push(c);
            }
            rest = chars.as_str();
        }

        output
    }
}
