use std::path::Path;
use std::sync::Arc;

use envios::adapter::outbound::local::file::FileSlot;
use envios::application::desk::Desk;
use envios::application::settings::service::SettingsService;
use envios::port::outbound::settings::RemoteSettings;
use envios::testkit::handoff::RecordingHandoff;
use envios::testkit::quote::ScriptedQuoteProvider;
use envios::testkit::settings::{MemorySlot, ScriptedRemote};

/// A desk wired to in-memory ports, with handles to inspect them.
pub struct TestDesk {
    pub desk: Desk,
    pub provider: Arc<ScriptedQuoteProvider>,
    pub remote: Option<Arc<ScriptedRemote>>,
    pub local: Arc<MemorySlot>,
    pub handoff: Arc<RecordingHandoff>,
}

pub fn desk_with(provider: ScriptedQuoteProvider, remote: Option<ScriptedRemote>) -> TestDesk {
    let provider = Arc::new(provider);
    let remote = remote.map(Arc::new);
    let local = Arc::new(MemorySlot::new());
    let handoff = Arc::new(RecordingHandoff::new());

    let service = SettingsService::new(
        remote.clone().map(|r| r as Arc<dyn RemoteSettings>),
        local.clone(),
    );
    let desk = Desk::new(service, provider.clone(), handoff.clone())
        .with_recipient("584121234567");

    TestDesk {
        desk,
        provider,
        remote,
        local,
        handoff,
    }
}

/// A local-only desk whose settings live in a JSON file at `path`.
pub fn desk_on_file(path: &Path) -> Desk {
    let service = SettingsService::new(None, Arc::new(FileSlot::new(path)));
    Desk::new(
        service,
        Arc::new(ScriptedQuoteProvider::new()),
        Arc::new(RecordingHandoff::new()),
    )
}
