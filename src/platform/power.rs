// Aggregate battery report via the battery crate

use crate::models::BatteryReport;
use crate::providers::BatteryProvider;
use battery::units::energy::watt_hour;

pub struct PowerSupplyBattery;

impl BatteryProvider for PowerSupplyBattery {
    fn battery_report(&self) -> anyhow::Result<BatteryReport> {
        let manager = battery::Manager::new()?;
        let mut batteries = manager.batteries()?;
        match batteries.next() {
            Some(Ok(b)) => Ok(BatteryReport {
                full_charge_mwh: Some(f64::from(b.energy_full().get::<watt_hour>()) * 1000.0),
                remaining_mwh: Some(f64::from(b.energy().get::<watt_hour>()) * 1000.0),
            }),
            Some(Err(e)) => Err(e.into()),
            // No battery present: an empty report, not an error here; the
            // probe turns absent capacities into its failure.
            None => Ok(BatteryReport::default()),
        }
    }
}
