/// Implements [`Store`](crate::store::Store) for types that are [`Storable`](crate::store::Storable),
/// reading and writing them as JSON. A missing file is created with the default value.
#[macro_export]
macro_rules! impl_store {
    ($($name:ty),+ $(,)?) => ($(
        #[async_trait::async_trait]
        impl $crate::store::Store for $name {
            async fn new() -> anyhow::Result<Self> {
                use anyhow::Context as _;
                use tokio::fs;

                let path = <Self as $crate::store::Storable>::path()?;

                if fs::metadata(&path).await.is_err() {
                    return <Self as $crate::store::Store>::save(&Self::default()).await;
                }

                let buffer = fs::read_to_string(&path)
                    .await
                    .with_context(|| format!("Error opening {}", path.display()))?;

                serde_json::from_str(&buffer)
                    .with_context(|| format!("Failed to deserialize {}", path.display()))
            }

            async fn save(&self) -> anyhow::Result<Self> {
                use anyhow::Context as _;
                use tokio::fs;

                let path = <Self as $crate::store::Storable>::path()?;

                fs::create_dir_all(path.parent().context("Failed to get store directory")?)
                    .await
                    .context("Failed to create store directory")?;

                fs::write(
                    &path,
                    serde_json::to_string_pretty(&self).context("Failed to serialize")?,
                )
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;

                log::debug!("Saved store to {}", path.display());

                Ok(self.clone())
            }
        }
    )+)
}
