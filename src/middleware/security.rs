use crate::core::config::{Environment, SecurityConfig};
use crate::monitoring::advisory::LogSink;
#[cfg(feature = "stats")]
use crate::monitoring::advisory::{AdvisorySink, PolicyWarning};
use crate::monitoring::stats::CspStats;
use crate::security::headers::build_security_headers;
use crate::security::nonce::{NonceGenerator, RequestNonce};
use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    Error, HttpMessage,
};
use arc_swap::ArcSwap;
use futures::future::{ready, LocalBoxFuture, Ready};
use std::{rc::Rc, sync::Arc};
#[cfg(feature = "stats")]
use std::time::Instant;

#[derive(Clone)]
pub struct SecurityHeadersMiddleware {
    config: Arc<ArcSwap<SecurityConfig>>,
    nonce_generator: Arc<NonceGenerator>,
    stats: Arc<CspStats>,
}

impl SecurityHeadersMiddleware {
    pub fn new(config: SecurityConfig) -> Self {
        let nonce_generator = NonceGenerator::new(config.nonce_length());
        Self {
            config: Arc::new(ArcSwap::from_pointee(config)),
            nonce_generator: Arc::new(nonce_generator),
            stats: Arc::new(CspStats::new()),
        }
    }

    #[inline]
    pub fn config(&self) -> Arc<SecurityConfig> {
        self.config.load_full()
    }

    /// Swaps the active configuration; requests already in flight keep the old one.
    pub fn replace_config(&self, config: SecurityConfig) {
        self.nonce_generator.set_length(config.nonce_length());
        self.config.store(Arc::new(config));
        #[cfg(feature = "stats")]
        self.stats.increment_config_update_count();
    }

    pub fn update_config<F>(&self, f: F)
    where
        F: FnOnce(&mut SecurityConfig),
    {
        let mut config = self.config.load().as_ref().clone();
        f(&mut config);
        self.replace_config(config);
    }

    #[inline]
    pub fn stats(&self) -> &Arc<CspStats> {
        &self.stats
    }
}

impl<S, B> Transform<S, ServiceRequest> for SecurityHeadersMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = SecurityHeadersService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SecurityHeadersService {
            service: Rc::new(service),
            config: self.config.clone(),
            nonce_generator: self.nonce_generator.clone(),
            #[cfg(feature = "stats")]
            stats: self.stats.clone(),
        }))
    }
}

pub struct SecurityHeadersService<S> {
    service: Rc<S>,
    config: Arc<ArcSwap<SecurityConfig>>,
    nonce_generator: Arc<NonceGenerator>,
    #[cfg(feature = "stats")]
    stats: Arc<CspStats>,
}

#[cfg(feature = "stats")]
struct CountingSink<'a> {
    stats: &'a CspStats,
}

#[cfg(feature = "stats")]
impl AdvisorySink for CountingSink<'_> {
    fn warn(&self, warning: &PolicyWarning) {
        self.stats.increment_advisory_count();
        LogSink.warn(warning);
    }
}

impl<S, B> Service<ServiceRequest> for SecurityHeadersService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let config = self.config.load_full();
        let nonce_generator = self.nonce_generator.clone();
        #[cfg(feature = "stats")]
        let stats = self.stats.clone();

        Box::pin(async move {
            #[cfg(feature = "stats")]
            stats.increment_request_count();

            let nonce = if config.nonce_enabled() {
                let nonce = nonce_generator.generate()?;
                #[cfg(feature = "stats")]
                stats.increment_nonce_generation_count();
                req.extensions_mut().insert(RequestNonce(nonce.clone()));
                Some(nonce)
            } else {
                None
            };

            // errors from the wrapped service pass through untouched
            let mut res = service.call(req).await?;

            #[cfg(feature = "stats")]
            let timer = Instant::now();
            #[cfg(feature = "stats")]
            let sink = CountingSink { stats: &stats };
            #[cfg(not(feature = "stats"))]
            let sink = LogSink;
            let headers = build_security_headers(&config, nonce.as_deref(), &sink);

            let response_headers = res.headers_mut();
            for pair in headers.header_pairs() {
                match pair {
                    Ok((name, value)) => {
                        response_headers.insert(name, value);
                    }
                    Err(e) => {
                        #[cfg(feature = "stats")]
                        stats.increment_header_error_count();
                        log::error!("Skipping security header: {}", e);
                    }
                }
            }

            #[cfg(feature = "stats")]
            stats.record_header_generation(
                usize::try_from(timer.elapsed().as_nanos()).unwrap_or(usize::MAX),
            );

            Ok(res)
        })
    }
}

#[inline]
pub fn security_headers(config: SecurityConfig) -> SecurityHeadersMiddleware {
    SecurityHeadersMiddleware::new(config)
}

pub fn security_headers_from_env() -> SecurityHeadersMiddleware {
    let mut config = SecurityConfig::default();
    config.set_environment(Environment::from_env());
    SecurityHeadersMiddleware::new(config)
}
