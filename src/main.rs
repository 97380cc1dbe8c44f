use actix_web_security_headers::{
    build_security_headers, CspRule, Directive, Environment, LogSink, NonceGenerator,
    SecurityConfigBuilder,
};

fn main() {
    println!("Actix Web Security Headers Example");

    let environment = Environment::from_env();
    let config = match SecurityConfigBuilder::new()
        .environment(environment)
        .rule(
            CspRule::new()
                .description("YouTube embeds")
                .directive(Directive::FrameSrc, "https://www.youtube.com"),
        )
        .rule(CspRule::new().directive(Directive::UpgradeInsecureRequests, true))
        .build()
    {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    let nonce = match NonceGenerator::new(config.nonce_length()).generate() {
        Ok(nonce) => nonce,
        Err(e) => {
            eprintln!("Nonce generation failed: {}", e);
            std::process::exit(1);
        }
    };

    println!("Environment: {:?}", environment);
    for (name, value) in build_security_headers(&config, Some(&nonce), &LogSink).iter() {
        println!("{}: {}", name, value);
    }
}
