use crate::constants::NONE_SOURCE;
use crate::core::rule::DirectiveValue;
use smallvec::SmallVec;

pub type TokenList = SmallVec<[String; 4]>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoneResolution {
    Override,
    Extend,
}

// `true` and `""` yield a single empty token: the directive is present without a value.
pub fn normalize(value: &DirectiveValue) -> TokenList {
    let mut tokens = TokenList::new();

    match value {
        DirectiveValue::Flag(true) => tokens.push(String::new()),
        DirectiveValue::Flag(false) => {}
        DirectiveValue::Text(text) if text.is_empty() => tokens.push(String::new()),
        DirectiveValue::Text(text) => {
            tokens.extend(text.split_whitespace().map(str::to_owned));
        }
        DirectiveValue::List(items) => {
            tokens.extend(
                items
                    .iter()
                    .map(|item| item.trim())
                    .filter(|token| !token.is_empty())
                    .map(str::to_owned),
            );
        }
    }

    tokens
}

#[inline]
pub fn is_valueless(tokens: &[String]) -> bool {
    tokens.len() == 1 && tokens[0].is_empty()
}

// Matching is exact: `'None'` stays an ordinary token.
pub fn resolve_none(tokens: &mut TokenList) -> NoneResolution {
    if tokens.len() > 1 && tokens.iter().any(|t| t == NONE_SOURCE) {
        tokens.retain(|t| t != NONE_SOURCE);
    }

    if tokens.len() == 1 && tokens[0] == NONE_SOURCE {
        NoneResolution::Override
    } else {
        NoneResolution::Extend
    }
}
