use serde::{Deserialize, Serialize};
use std::fmt;

const DEFAULT_SESSION_NAME: &str = "aws-lookup";

/// Where and as whom the lookup clients talk to AWS.
///
/// ```rust
/// use aws_lookup::config::AwsConfig;
///
/// let config: AwsConfig = serde_json::from_str(r#"{"region": "eu-west-1"}"#).unwrap();
/// assert_eq!(config.region, "eu-west-1");
/// ```
#[derive(Clone, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct AwsConfig {
    /// AWS region, e.g. `us-east-1`.
    pub region: String,
    /// Endpoint override, e.g. a local emulator.
    #[serde(default)]
    pub endpoint_url: Option<String>,
    /// Named profile from the shared config files.
    #[serde(default)]
    pub profile: Option<String>,
    /// IAM role to assume through STS.
    #[serde(default)]
    pub role_arn: Option<String>,
    /// STS session name used when assuming `role_arn`.
    #[serde(default)]
    pub session_name: Option<String>,
}

impl fmt::Debug for AwsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AwsConfig")
            .field("region", &self.region)
            .field("endpoint_url", &self.endpoint_url)
            .field("profile", &self.profile)
            .field("role_arn", &self.role_arn.as_ref().map(|_| "[REDACTED]"))
            .field("session_name", &self.session_name)
            .finish()
    }
}

impl AwsConfig {
    /// Configuration for `region` with every other setting left to the
    /// environment.
    pub fn new(region: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            ..Default::default()
        }
    }

    /// Sets the endpoint override.
    #[must_use]
    pub fn with_endpoint_url(mut self, endpoint_url: impl Into<String>) -> Self {
        self.endpoint_url = Some(endpoint_url.into());
        self
    }

    /// Sets the shared config profile.
    #[must_use]
    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = Some(profile.into());
        self
    }

    /// Sets the role to assume.
    #[must_use]
    pub fn with_role_arn(mut self, role_arn: impl Into<String>) -> Self {
        self.role_arn = Some(role_arn.into());
        self
    }

    fn loader(&self) -> aws_config::ConfigLoader {
        let mut loader =
            aws_config::from_env().region(aws_config::Region::new(self.region.clone()));
        if let Some(endpoint_url) = &self.endpoint_url {
            loader = loader.endpoint_url(endpoint_url);
        }
        if let Some(profile) = &self.profile {
            loader = loader.profile_name(profile);
        }
        loader
    }

    /// Resolves credentials and builds the shared SDK configuration.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "aws_lookup.config.load")
    )]
    pub async fn load(&self) -> aws_config::SdkConfig {
        let base = self.loader().load().await;
        let Some(role_arn) = &self.role_arn else {
            return base;
        };
        let session_name = self.session_name.as_deref().unwrap_or(DEFAULT_SESSION_NAME);
        #[cfg(feature = "tracing")]
        tracing::debug!(session_name, "assuming role through STS");
        let provider = aws_config::sts::AssumeRoleProvider::builder(role_arn)
            .session_name(session_name)
            .region(aws_config::Region::new(self.region.clone()))
            .configure(&base)
            .build()
            .await;
        self.loader().credentials_provider(provider).load().await
    }
}

/// The SDK clients every finder in this crate is written against.
#[derive(Clone, Debug)]
pub struct Clients {
    /// EC2 networking lookups.
    pub ec2: aws_sdk_ec2::Client,
    /// Database Migration Service lookups.
    pub dms: aws_sdk_databasemigration::Client,
    /// CloudWatch RUM lookups.
    pub rum: aws_sdk_rum::Client,
}

impl Clients {
    /// Builds every client from one shared configuration.
    pub fn new(sdk_config: &aws_config::SdkConfig) -> Self {
        Self {
            ec2: aws_sdk_ec2::Client::new(sdk_config),
            dms: aws_sdk_databasemigration::Client::new(sdk_config),
            rum: aws_sdk_rum::Client::new(sdk_config),
        }
    }
}
