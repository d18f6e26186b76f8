//! `pvc-remove-selector list` – show registered plugins.

use pvc_selector_core::PluginServer;

pub fn run_list(server: &PluginServer) {
    let names = server.names();
    if names.is_empty() {
        println!("No plugins registered.");
        return;
    }
    println!("{:<40} {}", "NAME", "KIND");
    for name in names {
        if let Some(kind) = server.kind_of(name) {
            println!("{:<40} {}", name, kind);
        }
    }
}
