pub(crate) const HEADER_CSP: &str = "Content-Security-Policy";
pub(crate) const HEADER_FRAME_OPTIONS: &str = "X-Frame-Options";
pub(crate) const HEADER_CONTENT_TYPE_OPTIONS: &str = "X-Content-Type-Options";
pub(crate) const HEADER_REFERRER_POLICY: &str = "Referrer-Policy";
pub(crate) const HEADER_XSS_PROTECTION: &str = "X-XSS-Protection";
pub(crate) const HEADER_PERMISSIONS_POLICY: &str = "Permissions-Policy";
pub(crate) const HEADER_HSTS: &str = "Strict-Transport-Security";
pub(crate) const HEADER_NONCE: &str = "x-nonce";

pub(crate) const FRAME_OPTIONS_VALUE: &str = "DENY";
pub(crate) const CONTENT_TYPE_OPTIONS_VALUE: &str = "nosniff";
pub(crate) const REFERRER_POLICY_VALUE: &str = "strict-origin-when-cross-origin";
pub(crate) const XSS_PROTECTION_VALUE: &str = "1; mode=block";
pub(crate) const PERMISSIONS_POLICY_VALUE: &str =
    "camera=(), microphone=(), geolocation=(), payment=(), usb=(), interest-cohort=()";
pub(crate) const HSTS_VALUE: &str = "max-age=63072000; includeSubDomains; preload";

pub(crate) const DEFAULT_SRC: &str = "default-src";
pub(crate) const SCRIPT_SRC: &str = "script-src";
pub(crate) const STYLE_SRC: &str = "style-src";
pub(crate) const IMG_SRC: &str = "img-src";
pub(crate) const CONNECT_SRC: &str = "connect-src";
pub(crate) const FONT_SRC: &str = "font-src";
pub(crate) const OBJECT_SRC: &str = "object-src";
pub(crate) const MEDIA_SRC: &str = "media-src";
pub(crate) const FRAME_SRC: &str = "frame-src";
pub(crate) const WORKER_SRC: &str = "worker-src";
pub(crate) const MANIFEST_SRC: &str = "manifest-src";
pub(crate) const CHILD_SRC: &str = "child-src";
pub(crate) const FRAME_ANCESTORS: &str = "frame-ancestors";
pub(crate) const BASE_URI: &str = "base-uri";
pub(crate) const FORM_ACTION: &str = "form-action";
pub(crate) const SANDBOX: &str = "sandbox";
pub(crate) const SCRIPT_SRC_ELEM: &str = "script-src-elem";
pub(crate) const SCRIPT_SRC_ATTR: &str = "script-src-attr";
pub(crate) const STYLE_SRC_ELEM: &str = "style-src-elem";
pub(crate) const STYLE_SRC_ATTR: &str = "style-src-attr";
pub(crate) const PREFETCH_SRC: &str = "prefetch-src";
pub(crate) const REPORT_URI: &str = "report-uri";
pub(crate) const REPORT_TO: &str = "report-to";
pub(crate) const REQUIRE_TRUSTED_TYPES_FOR: &str = "require-trusted-types-for";
pub(crate) const TRUSTED_TYPES: &str = "trusted-types";
pub(crate) const UPGRADE_INSECURE_REQUESTS: &str = "upgrade-insecure-requests";
pub(crate) const BLOCK_ALL_MIXED_CONTENT: &str = "block-all-mixed-content";

pub(crate) const NONE_SOURCE: &str = "'none'";
pub(crate) const SELF_SOURCE: &str = "'self'";
pub(crate) const UNSAFE_INLINE_SOURCE: &str = "'unsafe-inline'";
pub(crate) const UNSAFE_EVAL_SOURCE: &str = "'unsafe-eval'";
pub(crate) const STRICT_DYNAMIC_SOURCE: &str = "'strict-dynamic'";
pub(crate) const WILDCARD_SOURCE: &str = "*";
pub(crate) const BLOB_SOURCE: &str = "blob:";
pub(crate) const DATA_SOURCE: &str = "data:";
pub(crate) const DEV_WS_SOURCE: &str = "ws://localhost:*";
pub(crate) const DEV_WSS_SOURCE: &str = "wss://localhost:*";
pub(crate) const NONCE_PREFIX: &str = "'nonce-";
pub(crate) const HASH_PREFIX_SHA256: &str = "'sha256-";
pub(crate) const HASH_PREFIX_SHA384: &str = "'sha384-";
pub(crate) const HASH_PREFIX_SHA512: &str = "'sha512-";
pub(crate) const SUFFIX_QUOTE: &str = "'";
pub(crate) const SEMICOLON_SPACE: &str = "; ";

pub(crate) const DEFAULT_NONCE_LENGTH: usize = 16;
pub(crate) const MIN_NONCE_CHARS: usize = 24;
pub(crate) const LARGE_HEADER_BYTES: usize = 4000;
pub(crate) const OVERSIZED_HEADER_BYTES: usize = 8000;

pub(crate) const ENVIRONMENT_VAR: &str = "APP_ENV";
