use crate::FloorplanApp;
use crate::state::{ActiveEntity, Mode};

pub fn tools_panel(app: &mut FloorplanApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(true)
        .default_width(180.0)
        .show(ctx, |ui| {
            ui.heading("Mode");

            let current = app.floorplanner().mode();
            for mode in Mode::ALL {
                if ui.selectable_label(current == mode, mode.name()).clicked() && current != mode {
                    log::info!("Mode selected from UI: {}", mode);
                    app.floorplanner_mut().set_mode(mode);
                }
            }
            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Add item").clicked() {
                    app.add_item();
                }
                if ui.button("Reset view").clicked() {
                    app.floorplanner_mut().reset();
                }
            });
            ui.separator();

            let floorplanner = app.floorplanner();
            let floorplan = floorplanner.floorplan();
            ui.label(format!("Corners: {}", floorplan.corners().len()));
            ui.label(format!("Walls: {}", floorplan.walls().len()));
            ui.label(format!("Items: {}", floorplan.items().len()));

            let hovered = match floorplanner.active() {
                ActiveEntity::None => "nothing",
                ActiveEntity::Corner(_) => "corner",
                ActiveEntity::Wall(_) => "wall",
                ActiveEntity::Item(_) => "item",
            };
            ui.label(format!("Hovering: {}", hovered));

            if let Some(item) = floorplan.selected_item().and_then(|id| floorplan.item(id)) {
                ui.separator();
                ui.strong(&item.name);
                ui.label(format!("{:.0} × {:.0} cm", item.size.x, item.size.y));
            }

            if floorplanner.mode() == Mode::Draw {
                ui.separator();
                ui.label("Click to place corners. Esc to stop.");
            }
        });
}
