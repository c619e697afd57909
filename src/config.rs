use anyhow::Result;
use bigdecimal::BigDecimal;
use std::env;
use std::str::FromStr;

/// Attendance-deduction knobs consumed by the payroll calculator.
#[derive(Debug, Clone)]
pub struct PayrollRates {
    /// Lateness tolerated per month before the per-minute penalty accrues.
    pub monthly_grace_minutes: i64,
    /// Billable late minutes are capped at this many per workday.
    pub daily_late_cap_minutes: i64,
    pub workday_minutes: i64,
    pub workdays_in_month: i64,
    pub overtime_multiplier: i64,
    /// Explicit per-minute late rate; derived from base salary when unset.
    pub late_rate_per_minute: Option<BigDecimal>,
}

impl Default for PayrollRates {
    fn default() -> Self {
        Self {
            monthly_grace_minutes: 120,
            daily_late_cap_minutes: 60,
            workday_minutes: 480,
            workdays_in_month: 22,
            overtime_multiplier: 2,
            late_rate_per_minute: None,
        }
    }
}

impl PayrollRates {
    fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            monthly_grace_minutes: env_i64("PAYROLL_GRACE_MINUTES", defaults.monthly_grace_minutes),
            daily_late_cap_minutes: env_i64(
                "PAYROLL_DAILY_LATE_CAP_MINUTES",
                defaults.daily_late_cap_minutes,
            ),
            workday_minutes: env_i64("PAYROLL_WORKDAY_MINUTES", defaults.workday_minutes),
            workdays_in_month: env_i64("PAYROLL_WORKDAYS_IN_MONTH", defaults.workdays_in_month),
            overtime_multiplier: env_i64("PAYROLL_OVERTIME_MULTIPLIER", defaults.overtime_multiplier),
            late_rate_per_minute: env::var("PAYROLL_LATE_RATE_PER_MINUTE")
                .ok()
                .and_then(|raw| BigDecimal::from_str(&raw).ok()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub rates: PayrollRates,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();
        Self::from_env_only()
    }

    /// Read environment variables without touching .env files; used by tests
    /// that control the environment directly.
    pub fn from_env_only() -> Result<Self> {
        Ok(Config {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "postgres://@localhost:5432/payroll".to_string()),
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            rates: PayrollRates::from_env(),
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn env_i64(key: &str, default: i64) -> i64 {
    env::var(key)
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(default)
}
