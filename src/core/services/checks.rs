//! Check handlers
//!
//! One handler per [`CheckKind`]. Every handler turns its own failures into
//! a [`CheckResult`]; none of them reads another check's outcome.

use std::sync::Arc;

use log::debug;
use serde_json::{Value, json};

use super::environment::validate_environment;
use crate::core::models::{CheckKind, CheckResult, DomainPolicy, EnvironmentSnapshot};
use crate::core::ports::{Backend, BackendError, DnsResolver, HttpProbe};

/// Response headers the security-headers check requires
pub const SECURITY_HEADERS: [&str; 5] = [
    "x-frame-options",
    "x-content-type-options",
    "x-xss-protection",
    "strict-transport-security",
    "content-security-policy",
];

/// Everything a check may read during one run
pub struct CheckContext {
    /// Snapshot read once at the start of the run
    pub snapshot: EnvironmentSnapshot,
    /// Hostname rules
    pub policy: DomainPolicy,
    /// Table used for the connectivity read
    pub probe_table: String,
    /// Hosted backend
    pub backend: Arc<dyn Backend>,
    /// DNS resolver
    pub dns: Arc<dyn DnsResolver>,
    /// Probe for the deployment's own origin
    pub http: Arc<dyn HttpProbe>,
}

impl std::fmt::Debug for CheckContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckContext")
            .field("snapshot", &self.snapshot)
            .field("policy", &self.policy)
            .field("probe_table", &self.probe_table)
            .finish_non_exhaustive()
    }
}

/// Run a single check against the context
pub async fn run_check(kind: CheckKind, ctx: &CheckContext) -> CheckResult {
    debug!("Running check: {kind}");
    let result = match kind {
        CheckKind::DomainConfiguration => domain_configuration(ctx),
        CheckKind::SslTls => ssl_tls(ctx),
        CheckKind::CustomDomain => custom_domain(ctx),
        CheckKind::BackendConnectivity => backend_connectivity(ctx).await,
        CheckKind::AuthReachability => auth_reachability(ctx).await,
        CheckKind::DomainAccessFunction => domain_access_function(ctx).await,
        CheckKind::SecurityHeaders => security_headers(ctx).await,
        CheckKind::DnsResolution => dns_resolution(ctx).await,
    };
    debug!("Check {kind} finished: {}", result.status);
    result
}

/// Loopback host in development mode gets the local exemptions
fn is_dev_loopback(ctx: &CheckContext) -> bool {
    !ctx.snapshot.is_production && ctx.policy.is_loopback(&ctx.snapshot.hostname)
}

fn domain_configuration(ctx: &CheckContext) -> CheckResult {
    let kind = CheckKind::DomainConfiguration;
    let snap = &ctx.snapshot;

    let valid = validate_environment(snap, &ctx.policy);
    let on_domain = ctx.policy.carries_expected_domain(&snap.hostname) || is_dev_loopback(ctx);

    if valid && on_domain {
        return CheckResult::pass(kind, format!("Serving {} from {}", snap.hostname, snap.origin));
    }

    let message = if snap.origin.is_empty() {
        "No origin could be read from the environment".to_string()
    } else if !valid {
        format!("Production build is running on {}", snap.hostname)
    } else {
        format!(
            "Hostname {} does not contain {}",
            snap.hostname, ctx.policy.expected_domain
        )
    };
    CheckResult::fail(kind, message).with_details(json!({ "snapshot": snap }))
}

fn ssl_tls(ctx: &CheckContext) -> CheckResult {
    let kind = CheckKind::SslTls;
    let snap = &ctx.snapshot;

    if snap.has_secure_scheme() {
        CheckResult::pass(kind, format!("{} is served over HTTPS", snap.origin))
    } else if is_dev_loopback(ctx) {
        CheckResult::pass(kind, format!("{} is a local development host", snap.hostname))
    } else if snap.origin.is_empty() {
        CheckResult::fail(kind, "No origin could be read from the environment")
    } else {
        CheckResult::fail(kind, format!("{} is not served over HTTPS", snap.origin))
            .with_details(json!({ "origin": snap.origin }))
    }
}

fn custom_domain(ctx: &CheckContext) -> CheckResult {
    let kind = CheckKind::CustomDomain;
    let hostname = &ctx.snapshot.hostname;

    if ctx.policy.is_production_host(hostname) {
        return CheckResult::pass(kind, format!("{hostname} is a production hostname"));
    }

    let shown = if hostname.is_empty() { "(none)" } else { hostname.as_str() };
    CheckResult::fail(
        kind,
        format!(
            "{shown} is not one of: {}",
            ctx.policy.production_hosts.join(", ")
        ),
    )
    .with_details(json!({
        "hostname": hostname,
        "production_hosts": ctx.policy.production_hosts,
    }))
}

async fn backend_connectivity(ctx: &CheckContext) -> CheckResult {
    let kind = CheckKind::BackendConnectivity;
    match ctx.backend.read_one(&ctx.probe_table).await {
        Ok(()) => CheckResult::pass(kind, format!("Read from {} succeeded", ctx.probe_table)),
        Err(e) => {
            CheckResult::fail(kind, format!("Backend read failed: {e}")).with_error(e.to_details())
        },
    }
}

async fn auth_reachability(ctx: &CheckContext) -> CheckResult {
    let kind = CheckKind::AuthReachability;

    let session = match ctx.backend.current_session().await {
        Ok(session) => session,
        Err(e) => return auth_error(kind, &e),
    };

    match ctx.backend.current_user().await {
        Ok(Some(user)) => {
            let who = user.email.unwrap_or(user.id);
            CheckResult::pass(kind, format!("Auth endpoint reachable, signed in as {who}"))
        },
        Ok(None) if session.is_some() => {
            CheckResult::pass(kind, "Auth endpoint reachable, stored session is not signed in")
        },
        Ok(None) => CheckResult::pass(kind, "Auth endpoint reachable, no active session"),
        Err(e) => auth_error(kind, &e),
    }
}

fn auth_error(kind: CheckKind, err: &BackendError) -> CheckResult {
    let result = if err.is_transient() {
        CheckResult::warning(kind, format!("Auth endpoint returned a transient error: {err}"))
    } else {
        CheckResult::fail(kind, format!("Auth endpoint unreachable: {err}"))
    };
    result.with_error(err.to_details())
}

async fn domain_access_function(ctx: &CheckContext) -> CheckResult {
    let kind = CheckKind::DomainAccessFunction;
    let origin = &ctx.snapshot.origin;

    if origin.is_empty() {
        return CheckResult::fail(kind, "No origin to validate");
    }

    match ctx.backend.validate_domain_access(origin).await {
        Ok(value) if is_truthy(&value) => {
            CheckResult::pass(kind, format!("Backend allows {origin}"))
        },
        Ok(value) => CheckResult::fail(kind, format!("Backend does not allow {origin}"))
            .with_details(json!({ "result": value })),
        Err(e) => CheckResult::fail(kind, format!("Domain validation call failed: {e}"))
            .with_error(e.to_details()),
    }
}

async fn security_headers(ctx: &CheckContext) -> CheckResult {
    let kind = CheckKind::SecurityHeaders;
    let origin = &ctx.snapshot.origin;

    if origin.is_empty() {
        return CheckResult::warning(kind, "No origin to fetch security headers from");
    }

    let response = match ctx.http.fetch_headers(&format!("{origin}/")).await {
        Ok(response) => response,
        Err(e) => {
            return CheckResult::warning(kind, format!("Could not fetch {origin}: {e}"))
                .with_error(e.to_details());
        },
    };

    let (present, missing): (Vec<&str>, Vec<&str>) =
        SECURITY_HEADERS.iter().partition(|h| response.contains(h));

    if missing.is_empty() {
        CheckResult::pass(kind, format!("All {} security headers present", present.len()))
    } else {
        CheckResult::warning(kind, format!("Missing security headers: {}", missing.join(", ")))
            .with_details(json!({
                "missing": missing,
                "present": present,
                "status": response.status,
            }))
    }
}

async fn dns_resolution(ctx: &CheckContext) -> CheckResult {
    let kind = CheckKind::DnsResolution;
    let hostname = &ctx.snapshot.hostname;

    if hostname.is_empty() {
        return CheckResult::fail(kind, "No hostname to resolve");
    }

    match ctx.dns.resolve_a(hostname).await {
        Ok(answer) => {
            let addresses = answer.a_records();
            if answer.is_success() && !addresses.is_empty() {
                CheckResult::pass(kind, format!("{hostname} resolves to {}", addresses.join(", ")))
            } else {
                CheckResult::fail(
                    kind,
                    format!(
                        "DNS lookup for {hostname} returned status {} with {} A record(s)",
                        answer.status,
                        addresses.len()
                    ),
                )
                .with_details(json!({ "dns": answer.raw }))
            }
        },
        Err(e) => CheckResult::fail(kind, format!("DNS lookup for {hostname} failed: {e}"))
            .with_error(e.to_details()),
    }
}

/// JSON truthiness: `null`, `false`, `0` and `""` are falsy
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f.abs() > 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
