//! Control D network node health

use super::ScrapePass;
use super::guard::{FetchScope, log_fetch_error, skip_if_empty};
use crate::metrics::MetricSink;
use crate::metrics::catalog::NETWORK_HEALTH_CODE;

const LOG_PREFIX: &str = "networkHealth";

/// Emit one `network_health_code` per node and service channel.
pub async fn collect(pass: &ScrapePass<'_>, sink: &mut MetricSink) {
    let network = match pass.client().network().await {
        Ok(network) => network,
        Err(e) => {
            log_fetch_error(LOG_PREFIX, FetchScope::Account, &e);
            return;
        }
    };

    if skip_if_empty(LOG_PREFIX, &network) {
        return;
    }

    for node in &network.network {
        let channels = [
            ("api", node.status.api),
            ("dns", node.status.dns),
            ("proxy", node.status.pxy),
        ];
        for (service, code) in channels {
            sink.push(
                &NETWORK_HEALTH_CODE,
                code as f64,
                [
                    node.city_name.as_str(),
                    node.iata_code.as_str(),
                    node.country_name.as_str(),
                    service,
                ],
            );
        }
    }
}
