// Repository trait for fleet data access
use crate::domain::fleet::{BatterySample, FleetSnapshot, GeneratorSample, PowerSample, Tower};
use async_trait::async_trait;

#[async_trait]
pub trait FleetRepository: Send + Sync {
    async fn towers(&self) -> anyhow::Result<Vec<Tower>>;

    async fn power_samples(&self) -> anyhow::Result<Vec<PowerSample>>;

    async fn battery_samples(&self) -> anyhow::Result<Vec<BatterySample>>;

    async fn generator_samples(&self) -> anyhow::Result<Vec<GeneratorSample>>;

    /// All four collections for one render pass
    async fn snapshot(&self) -> anyhow::Result<FleetSnapshot> {
        let (towers, power, batteries, generators) = tokio::try_join!(
            self.towers(),
            self.power_samples(),
            self.battery_samples(),
            self.generator_samples(),
        )?;

        Ok(FleetSnapshot {
            towers,
            power,
            batteries,
            generators,
        })
    }
}
