//! Argument Resolver
//!
//! Assigns every placeholder a 1-based value index and validates the
//! template against the number of supplied values.

use crate::{IntlFormatError, Placeholder, Result, Token};

/// Resolved value indices, one per placeholder in template order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// 1-based indices, aligned with the placeholders of the token list
    pub indices: Vec<usize>,
    /// Highest index referenced by any placeholder, 0 if there are none
    pub max_referenced: usize,
}

impl Resolution {
    /// Number of placeholders.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Whether the template has no placeholders.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Resolve the placeholders of `tokens` against `available` values.
///
/// Implicit placeholders take values from a cursor that starts at 1 and only
/// advances on implicit placeholders. Errors are checked in this order and
/// only the first is reported:
///
/// 1. an explicit index of 0
/// 2. an index beyond `available`
/// 3. more values than the highest referenced index
pub fn resolve(tokens: &[Token], available: usize) -> Result<Resolution> {
    let placeholders: Vec<&Placeholder> = tokens
        .iter()
        .filter_map(|token| match token {
            Token::Placeholder(p) => Some(p),
            Token::Literal(_) => None,
        })
        .collect();

    let mut cursor = 1usize;
    let mut indices = Vec::with_capacity(placeholders.len());

    for placeholder in &placeholders {
        let index = match placeholder.explicit_index {
            Some(n) => n,
            None => {
                let index = cursor;
                cursor += 1;
                index
            }
        };
        indices.push(index);
    }

    let max_referenced = indices.iter().copied().max().unwrap_or(0);

    if let Some(p) = placeholders.iter().find(|p| p.explicit_index == Some(0)) {
        return Err(IntlFormatError::InvalidSpecifierIndex {
            placeholder: p.raw.clone(),
        });
    }

    if let Some((p, &index)) = placeholders
        .iter()
        .zip(&indices)
        .find(|(_, index)| **index > available)
    {
        return Err(IntlFormatError::ArgumentIndexOutOfRange {
            placeholder: p.raw.clone(),
            index,
            available,
        });
    }

    if available > max_referenced {
        return Err(IntlFormatError::SurplusArguments {
            supplied: available,
            referenced: max_referenced,
        });
    }

    Ok(Resolution {
        indices,
        max_referenced,
    })
}
