mod camera;
mod config;
mod headless;
mod puppet;

use {
    crate::{
        config::SandboxConfig,
        headless::{DragGizmo, LogCanvas, ScriptedClick},
        puppet::Puppet,
    },
    color_eyre::Report,
    eyre::WrapErr,
    nalgebra as na,
    ossa::{
        Config, GizmoSlot, Locale, OverlayContext, Registry, SkeletonOverlay,
        Target,
    },
    tracing_subscriber::{
        layer::SubscriberExt as _, util::SubscriberInitExt as _, EnvFilter,
    },
};

fn main() -> Result<(), Report> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_error::ErrorLayer::default())
        .init();

    color_eyre::install()?;

    let config = Config::load_default().wrap_err("Failed to load overlay config")?;
    let sandbox = SandboxConfig::load_default().wrap_err("Failed to load sandbox config")?;
    tracing::info!("Config loaded");

    let registry = Registry::builtin()?;
    let locale = Locale::new();
    let overlay = SkeletonOverlay::new(&registry, &locale);

    let mut puppet = Puppet::new()?;

    let select = match &sandbox.select {
        Some(name) => {
            let key = puppet.find(name);
            if key.is_none() {
                tracing::warn!("Bone '{}' is not in the puppet", name);
            }
            key
        }
        None => None,
    };

    let camera = sandbox.camera.into_camera(
        na::Vector2::new(1920.0, 1080.0),
        na::Point3::new(0.0, 1.0, 0.0),
    );
    let mut canvas = LogCanvas::default();
    let mut selection = ScriptedClick::new(select);
    let mut gizmos = GizmoSlot::new(DragGizmo::new(na::Vector3::from(sandbox.drag)));

    for frame in 0..sandbox.frames {
        let stats = overlay.draw(
            &config,
            Some(&mut puppet),
            OverlayContext {
                projector: &camera,
                canvas: &mut canvas,
                selection: &mut selection,
                gizmos: &mut gizmos,
            },
        );

        tracing::info!(
            "Frame {}: {} partials ({} skipped), {} bones, {} connectors",
            frame,
            stats.partials,
            stats.skipped_partials,
            stats.bones,
            stats.connectors,
        );
    }

    for category in registry.displayed() {
        tracing::info!("Category '{}' is displayed", category.name());
    }

    if let Some(key) = gizmos.owner() {
        let transform = puppet
            .pose(key.partial, ossa::skeleton::POSE_LAYER)
            .and_then(|pose| pose.get(key.bone));

        if let Some(transform) = transform {
            tracing::info!(
                "Bone {:?} ends at {:?}",
                key,
                transform.translation.as_slice()
            );
        }
    }

    tracing::info!("{} lines drawn", canvas.lines);
    Ok(())
}
