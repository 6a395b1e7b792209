//! SNMP vs NETCONF - Response-Time Comparison
//!
//! Runs one simulated evaluation of both protocols against fixture data,
//! writes the comparison report, and prints the comparative scores.

use anyhow::Context;
use protocol_sim_core::analysis::{
    netconf_complexity, netconf_scalability, snmp_complexity, snmp_scalability, SecurityProfile,
    DEVICE_COUNTS,
};
use protocol_sim_core::evaluator::ComparativeEvaluator;
use protocol_sim_core::fixtures::DEFAULT_OID;
use protocol_sim_core::report::{write_report, REPORT_PATH};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .init();

    info!("protocol-sim v{}", protocol_sim_core::VERSION);

    // One evaluation with the hardcoded defaults: sysUpTime OID for SNMP,
    // the conventional running datastore for NETCONF.
    let evaluator = ComparativeEvaluator::new();
    let record = evaluator.evaluate(DEFAULT_OID, None).await;

    write_report(&record, REPORT_PATH)
        .await
        .with_context(|| format!("failed to write {}", REPORT_PATH))?;
    info!("report written to {}", REPORT_PATH);

    println!("SNMP vs NETCONF Comparison");
    println!("==========================");
    println!("SNMP response:    {}", record.snmp.payload_text());
    println!("SNMP time:        {:.3} seconds", record.snmp.elapsed_secs());
    println!("NETCONF time:     {:.3} seconds", record.netconf.elapsed_secs());
    println!("Combined time:    {:.3} seconds", record.combined_elapsed_secs());
    println!();
    println!("Security score:   SNMP {:.2}/1.0, NETCONF {:.2}/1.0",
        SecurityProfile::snmp().score(),
        SecurityProfile::netconf().score());
    println!("Complexity score: SNMP {:.2}, NETCONF {:.2}",
        snmp_complexity(),
        netconf_complexity());
    println!();
    println!("Scalability (modeled latency):");
    let snmp_curve = snmp_scalability(&DEVICE_COUNTS);
    let netconf_curve = netconf_scalability(&DEVICE_COUNTS);
    for (i, count) in DEVICE_COUNTS.iter().enumerate() {
        println!(
            "  {:>4} devices: SNMP {:.3}s, NETCONF {:.3}s",
            count, snmp_curve.latencies[i], netconf_curve.latencies[i]
        );
    }

    Ok(())
}
