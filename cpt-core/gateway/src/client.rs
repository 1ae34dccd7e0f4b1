//! 充电服务 HTTP 客户端

use std::collections::HashMap;
use std::time::Duration;

use reqwest::{Client, StatusCode};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use cpt_scenario::ChargingMode;

use crate::error::{GatewayError, Result};
use crate::models::{ApiData, QueueSnapshot, WaitingSnapshot};

/// 服务网关配置
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// 服务基础 URL
    pub base_url: String,

    /// 测试账号统一密码
    pub password: String,

    /// 连接超时（秒）
    pub connect_timeout: u64,

    /// 请求超时（秒）
    pub request_timeout: u64,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            password: "3".to_string(),
            connect_timeout: 10,
            request_timeout: 30,
        }
    }
}

/// 充电服务网关
pub struct ServiceGateway {
    base_url: String,

    password: String,

    http: Client,

    /// 用户名 -> token，一次运行内复用，不处理过期
    tokens: RwLock<HashMap<String, String>>,
}

impl ServiceGateway {
    /// 创建新的服务网关
    pub fn new(config: GatewayConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout))
            .connect_timeout(Duration::from_secs(config.connect_timeout))
            .build()
            .map_err(|e| GatewayError::Http(e.to_string()))?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            password: config.password,
            http,
            tokens: RwLock::new(HashMap::new()),
        })
    }

    /// 用户登录
    ///
    /// 同一用户在一次运行内只发起一次认证请求，之后复用缓存的 token。
    pub async fn login(&self, username: &str) -> Result<String> {
        if let Some(token) = self.tokens.read().await.get(username) {
            debug!("用户 {} 已登录，复用缓存 token", username);
            return Ok(token.clone());
        }

        info!("用户登录: {}", username);

        let url = format!("{}/api/v1/auth/login", self.base_url);
        let body = serde_json::json!({
            "Username": username,
            "Password": self.password,
        });

        let response = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| GatewayError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::Auth(format!(
                "用户 {} 登录失败: HTTP {}",
                username, status
            )));
        }

        let result: serde_json::Value = response
            .json()
            .await
            .map_err(|e| GatewayError::Parse(e.to_string()))?;

        let token = result["data"]["token"]
            .as_str()
            .ok_or_else(|| {
                GatewayError::Auth(format!("用户 {} 登录失败: 未获取到 token", username))
            })?
            .to_string();

        self.tokens
            .write()
            .await
            .insert(username.to_string(), token.clone());

        Ok(token)
    }

    /// 提交充电请求
    ///
    /// 被拒绝的请求不向上抛出，记录日志并返回 false，运行继续。
    pub async fn submit_charging_request(
        &self,
        username: &str,
        mode: ChargingMode,
        capacity: f64,
    ) -> bool {
        let token = match self.login(username).await {
            Ok(token) => token,
            Err(e) => {
                warn!("✗ {}", e);
                return false;
            }
        };

        let url = format!("{}/api/v1/charging/requests", self.base_url);
        let body = serde_json::json!({
            "ChargingMode": mode.as_str(),
            "RequestedCapacity": capacity,
        });

        match self
            .http
            .post(&url)
            .bearer_auth(&token)
            .json(&body)
            .send()
            .await
        {
            Ok(response) => {
                let status = response.status();
                if status == StatusCode::OK || status == StatusCode::CREATED {
                    true
                } else {
                    warn!("✗ 用户 {} 充电请求创建失败: HTTP {}", username, status);
                    false
                }
            }
            Err(e) => {
                warn!("✗ 用户 {} 充电请求发送异常: {}", username, e);
                false
            }
        }
    }

    /// 查询排队状态，失败时返回空快照
    pub async fn queue_snapshot(&self) -> QueueSnapshot {
        let url = format!(
            "{}/api/v1/admin/charging-piles/queue-vehicles",
            self.base_url
        );

        match self.fetch::<ApiData<QueueSnapshot>>(&url).await {
            Ok(envelope) => envelope.data.unwrap_or_default(),
            Err(e) => {
                warn!("✗ 获取排队状态失败: {}", e);
                QueueSnapshot::default()
            }
        }
    }

    /// 查询等候区车辆，失败时返回空快照
    pub async fn waiting_snapshot(&self) -> WaitingSnapshot {
        let url = format!("{}/api/v1/queue/waiting-vehicles", self.base_url);

        match self.fetch::<WaitingSnapshot>(&url).await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!("✗ 获取等候区车辆信息失败: {}", e);
                WaitingSnapshot::default()
            }
        }
    }

    async fn fetch<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!("GET {}", url);

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| GatewayError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::Http(format!("HTTP {}", status)));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| GatewayError::Parse(e.to_string()))
    }

}
