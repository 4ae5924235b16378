// src/rsa/mod.rs
//! RSA orchestration: key pairs, OAEP encryption, PSS / PKCS#1 v1.5 signatures
//!
//! A [`KeyUse`] decides everything about a key: the RSA algorithm it is
//! bound to and the usages of each half. The mapping lives in one table,
//! [`KeyUseProfile::for_use`].

mod keys;
mod operations;

use crate::enums::{KeyUsage, KeyUse, RsaAlg, RsaSignScheme};

/// Algorithm and per-half usages for one [`KeyUse`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct KeyUseProfile {
    pub algorithm: RsaAlg,
    pub public: &'static [KeyUsage],
    pub private: &'static [KeyUsage],
}

impl KeyUseProfile {
    pub(crate) fn for_use(key_use: KeyUse, sign_scheme: RsaSignScheme) -> Self {
        match key_use {
            KeyUse::Exchange => KeyUseProfile {
                algorithm: RsaAlg::RsaOaep,
                public: &[KeyUsage::Encrypt],
                private: &[KeyUsage::Decrypt],
            },
            KeyUse::Write => KeyUseProfile {
                algorithm: sign_scheme.into(),
                public: &[KeyUsage::Verify],
                private: &[KeyUsage::Sign],
            },
        }
    }

    /// Union of both halves, as requested at generation time
    pub(crate) fn all_usages(&self) -> Vec<KeyUsage> {
        self.public.iter().chain(self.private).copied().collect()
    }
}
