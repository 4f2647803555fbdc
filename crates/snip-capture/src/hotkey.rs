use anyhow::{Context, Result};
use global_hotkey::{
    GlobalHotKeyEvent, GlobalHotKeyManager,
    hotkey::{Code, HotKey, Modifiers},
};

/// Global snip hotkey, Ctrl+Shift+S.
pub struct HotkeyManager {
    manager: GlobalHotKeyManager,
    hotkey: HotKey,
}

impl HotkeyManager {
    pub fn new() -> Result<Self> {
        let manager = GlobalHotKeyManager::new().context("Failed to create hotkey manager")?;

        let hotkey = HotKey::new(Some(Modifiers::CONTROL | Modifiers::SHIFT), Code::KeyS);

        manager
            .register(hotkey)
            .context("Failed to register hotkey")?;

        Ok(Self { manager, hotkey })
    }

    /// Check if the hotkey was pressed (non-blocking).
    pub fn poll(&self) -> bool {
        let receiver = GlobalHotKeyEvent::receiver();
        if let Ok(event) = receiver.try_recv() {
            if event.id == self.hotkey.id() {
                tracing::debug!("hotkey event matched: {:?}", event.id);
                true
            } else {
                tracing::trace!("foreign hotkey event: {:?}", event.id);
                false
            }
        } else {
            false
        }
    }

    pub fn id(&self) -> u32 {
        self.hotkey.id()
    }
}

impl Drop for HotkeyManager {
    fn drop(&mut self) {
        let _ = self.manager.unregister(self.hotkey);
    }
}
