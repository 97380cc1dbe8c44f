use crate::constants;
use crate::error::CspError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectiveKind {
    Sources,
    Flag,
}

macro_rules! define_directives {
    ($($variant:ident => $directive_name:expr, $kind:ident, $implicit_self:expr;)+) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Directive {
            $($variant,)+
        }

        impl Directive {
            pub const ALL: &'static [Directive] = &[$(Directive::$variant,)+];

            #[inline]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Directive::$variant => $directive_name,)+
                }
            }

            #[inline]
            pub const fn kind(self) -> DirectiveKind {
                match self {
                    $(Directive::$variant => DirectiveKind::$kind,)+
                }
            }

            #[inline]
            pub const fn has_implicit_self(self) -> bool {
                match self {
                    $(Directive::$variant => $implicit_self,)+
                }
            }
        }
    };
}

define_directives! {
    DefaultSrc => constants::DEFAULT_SRC, Sources, true;
    ScriptSrc => constants::SCRIPT_SRC, Sources, true;
    ScriptSrcElem => constants::SCRIPT_SRC_ELEM, Sources, true;
    ScriptSrcAttr => constants::SCRIPT_SRC_ATTR, Sources, true;
    StyleSrc => constants::STYLE_SRC, Sources, true;
    StyleSrcElem => constants::STYLE_SRC_ELEM, Sources, true;
    StyleSrcAttr => constants::STYLE_SRC_ATTR, Sources, true;
    ImgSrc => constants::IMG_SRC, Sources, true;
    FontSrc => constants::FONT_SRC, Sources, true;
    ConnectSrc => constants::CONNECT_SRC, Sources, true;
    MediaSrc => constants::MEDIA_SRC, Sources, true;
    ObjectSrc => constants::OBJECT_SRC, Sources, true;
    FrameSrc => constants::FRAME_SRC, Sources, true;
    ChildSrc => constants::CHILD_SRC, Sources, true;
    WorkerSrc => constants::WORKER_SRC, Sources, true;
    ManifestSrc => constants::MANIFEST_SRC, Sources, true;
    PrefetchSrc => constants::PREFETCH_SRC, Sources, true;
    FrameAncestors => constants::FRAME_ANCESTORS, Sources, true;
    BaseUri => constants::BASE_URI, Sources, true;
    FormAction => constants::FORM_ACTION, Sources, true;
    Sandbox => constants::SANDBOX, Sources, false;
    ReportUri => constants::REPORT_URI, Sources, false;
    ReportTo => constants::REPORT_TO, Sources, false;
    RequireTrustedTypesFor => constants::REQUIRE_TRUSTED_TYPES_FOR, Sources, false;
    TrustedTypes => constants::TRUSTED_TYPES, Sources, false;
    UpgradeInsecureRequests => constants::UPGRADE_INSECURE_REQUESTS, Flag, false;
    BlockAllMixedContent => constants::BLOCK_ALL_MIXED_CONTENT, Flag, false;
}

impl Directive {
    #[inline]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|d| d.name() == name)
    }

    #[inline]
    pub const fn is_flag(self) -> bool {
        matches!(self.kind(), DirectiveKind::Flag)
    }

    #[inline]
    pub const fn accepts_sources(self) -> bool {
        !self.is_flag()
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Directive {
    type Err = CspError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| CspError::InvalidDirectiveName(s.to_string()))
    }
}

impl Serialize for Directive {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Directive {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}
