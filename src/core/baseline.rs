use crate::constants::{
    BLOB_SOURCE, DATA_SOURCE, DEV_WSS_SOURCE, DEV_WS_SOURCE, NONCE_PREFIX, NONE_SOURCE,
    SELF_SOURCE, STRICT_DYNAMIC_SOURCE, SUFFIX_QUOTE, UNSAFE_EVAL_SOURCE, UNSAFE_INLINE_SOURCE,
};
use crate::core::config::Environment;
use crate::core::directive::Directive;
use crate::core::table::DirectiveTable;
use smallvec::{smallvec, SmallVec};

#[inline]
pub fn nonce_source(nonce: &str) -> String {
    let mut source = String::with_capacity(NONCE_PREFIX.len() + nonce.len() + SUFFIX_QUOTE.len());
    source.push_str(NONCE_PREFIX);
    source.push_str(nonce);
    source.push_str(SUFFIX_QUOTE);
    source
}

pub fn baseline_policy(environment: Environment, nonce: Option<&str>) -> DirectiveTable {
    let is_dev = environment.is_dev();
    let nonce = nonce.filter(|n| !n.is_empty());

    let mut connect_src: SmallVec<[&str; 3]> = smallvec![SELF_SOURCE];
    if is_dev {
        connect_src.push(DEV_WS_SOURCE);
        connect_src.push(DEV_WSS_SOURCE);
    }

    // With 'strict-dynamic', CSP3 browsers ignore 'self', 'unsafe-inline' and scheme
    // sources, so they are left out of the nonce variant.
    let mut script_src: SmallVec<[String; 3]> = match nonce {
        Some(nonce) => smallvec![nonce_source(nonce), STRICT_DYNAMIC_SOURCE.to_owned()],
        None => smallvec![SELF_SOURCE.to_owned(), UNSAFE_INLINE_SOURCE.to_owned()],
    };
    let script_src_elem = script_src.clone();
    if is_dev {
        script_src.push(UNSAFE_EVAL_SOURCE.to_owned());
    }

    DirectiveTable::new()
        .with_directive(Directive::DefaultSrc, [SELF_SOURCE])
        .with_directive(Directive::BaseUri, [SELF_SOURCE])
        .with_directive(Directive::ChildSrc, [NONE_SOURCE])
        .with_directive(Directive::ConnectSrc, connect_src)
        .with_directive(Directive::FontSrc, [SELF_SOURCE])
        .with_directive(Directive::FormAction, [SELF_SOURCE])
        .with_directive(Directive::FrameAncestors, [NONE_SOURCE])
        .with_directive(Directive::FrameSrc, [NONE_SOURCE])
        .with_directive(Directive::ImgSrc, [SELF_SOURCE, BLOB_SOURCE, DATA_SOURCE])
        .with_directive(Directive::ManifestSrc, [SELF_SOURCE])
        .with_directive(Directive::MediaSrc, [SELF_SOURCE])
        .with_directive(Directive::ObjectSrc, [NONE_SOURCE])
        .with_directive(Directive::ScriptSrc, script_src)
        .with_directive(Directive::ScriptSrcElem, script_src_elem)
        // inline styles injected by UI frameworks cannot carry a nonce
        .with_directive(Directive::StyleSrc, [SELF_SOURCE, UNSAFE_INLINE_SOURCE])
        .with_directive(Directive::StyleSrcElem, [SELF_SOURCE, UNSAFE_INLINE_SOURCE])
        .with_directive(Directive::StyleSrcAttr, [UNSAFE_INLINE_SOURCE])
        .with_directive(Directive::WorkerSrc, [SELF_SOURCE, BLOB_SOURCE])
}
