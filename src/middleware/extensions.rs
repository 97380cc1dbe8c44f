use crate::security::hash::{HashAlgorithm, HashGenerator};
use crate::security::nonce::RequestNonce;
use actix_web::HttpMessage;

pub trait CspExtensions {
    fn get_nonce(&self) -> Option<String>;
    fn generate_hash_source(&self, algorithm: HashAlgorithm, data: &[u8]) -> String;
}

impl<T> CspExtensions for T
where
    T: HttpMessage,
{
    fn get_nonce(&self) -> Option<String> {
        self.extensions()
            .get::<RequestNonce>()
            .map(|nonce| nonce.0.clone())
    }

    fn generate_hash_source(&self, algorithm: HashAlgorithm, data: &[u8]) -> String {
        HashGenerator::generate_source(algorithm, data)
    }
}
