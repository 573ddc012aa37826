//! CLI runner - executes commands

use crate::api::Endpoint;
use crate::cli::commands::{Cli, Commands, OutputFormat, RequestArgs};
use crate::client::LarkClient;
use crate::config::ClientConfig;
use crate::error::{Error, Result, ResultExt};
use crate::pagination::{PageEvent, PageShape};
use crate::payload::{Payload, RequestOptions};
use crate::types::{JsonValue, Method};
use futures::StreamExt;
use serde_json::json;
use std::num::NonZeroUsize;
use tracing::{debug, info};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Request { method, path, args } => self.request(*method, path, args).await,
            Commands::Pages {
                path,
                method,
                items_field,
                max_pages,
                args,
            } => {
                self.pages(*method, path, items_field, *max_pages, args)
                    .await
            }
        }
    }

    /// Load config from file or environment, then apply flag overrides
    fn load_config(&self) -> Result<ClientConfig> {
        let mut config = match &self.cli.config {
            Some(path) => ClientConfig::from_file(path)?,
            None => ClientConfig::from_env()?,
        };

        if let Some(url) = &self.cli.base_url {
            config.base_url.clone_from(url);
        }
        if let Some(token) = &self.cli.token {
            config.access_token = Some(token.clone());
        }

        config.validate()?;
        Ok(config)
    }

    fn client(&self) -> Result<LarkClient> {
        let config = self.load_config()?;
        debug!("Using base URL {}", config.base_url);
        LarkClient::new(config)
    }

    async fn request(&self, method: Method, path: &str, args: &RequestArgs) -> Result<()> {
        let client = self.client()?;
        let (payload, options) = build_request(args)?;

        let response = client
            .request(&Endpoint::custom(method, path), payload, &options)
            .await?;

        self.output(&serde_json::to_value(&response)?);
        Ok(())
    }

    async fn pages(
        &self,
        method: Method,
        path: &str,
        items_field: &str,
        max_pages: Option<NonZeroUsize>,
        args: &RequestArgs,
    ) -> Result<()> {
        let client = self.client()?;
        let (payload, options) = build_request(args)?;

        let mut stream = client.paginate::<JsonValue>(
            &Endpoint::custom(method, path),
            payload,
            &options,
            PageShape::items(items_field),
        );

        let mut pages = 0usize;
        while let Some(event) = stream.next().await {
            match event {
                PageEvent::Page(body) => {
                    pages += 1;
                    self.output(&body.to_value(items_field)?);
                    if max_pages.is_some_and(|max| pages >= max.get()) {
                        info!("Stopping after {} pages", pages);
                        break;
                    }
                }
                PageEvent::Failed(e) => {
                    self.output(&json!({ "error": e.to_string(), "pages": pages }));
                    return Err(e);
                }
            }
        }

        info!("Fetched {} pages", pages);
        Ok(())
    }

    fn output(&self, value: &JsonValue) {
        match self.cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string(value).unwrap_or_default());
            }
            OutputFormat::Pretty => {
                println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
            }
        }
    }
}

/// Turn CLI request arguments into a payload and options
fn build_request(args: &RequestArgs) -> Result<(Payload, RequestOptions)> {
    let mut payload = Payload::new();

    for (key, value) in &args.params {
        // repeated keys become an array so they are sent as repeated params
        match payload.params.get_mut(key) {
            Some(JsonValue::Array(values)) => values.push(JsonValue::String(value.clone())),
            Some(existing) => {
                let first = existing.take();
                *existing = JsonValue::Array(vec![first, JsonValue::String(value.clone())]);
            }
            None => {
                payload
                    .params
                    .insert(key.clone(), JsonValue::String(value.clone()));
            }
        }
    }

    for (key, value) in &args.path_params {
        payload.path.insert(key.clone(), value.clone());
    }

    for (key, value) in &args.headers {
        payload.headers.insert(key.clone(), value.clone());
    }

    if let Some(data) = &args.data {
        let body: JsonValue = serde_json::from_str(data).context("--data is not valid JSON")?;
        payload.data = Some(body);
    }

    let mut options = RequestOptions::new();
    if let Some(token) = &args.user_token {
        if token.is_empty() {
            return Err(Error::config("--user-token must not be empty"));
        }
        options = options.with_user_access_token(token.clone());
    }

    Ok((payload, options))
}
