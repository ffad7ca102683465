use crate::FloorplanApp;
use crate::input::route_event;
use crate::view::FloorplanView;

pub fn central_panel(app: &mut FloorplanApp, ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none())
        .show(ctx, |ui| {
            let (response, painter) =
                ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
            let canvas_rect = response.rect;

            let view = app.floorplanner_mut().view_mut();
            let resized = view.canvas_rect() != canvas_rect;
            view.set_canvas_rect(canvas_rect);
            if resized {
                view.handle_window_resize();
            }
            app.input_mut().set_canvas_rect(canvas_rect);
            app.centre_once();

            let events = app.input_mut().process_input(ctx);
            for event in &events {
                route_event(event, app.floorplanner_mut());
            }

            let (floorplanner, renderer) = app.parts();
            renderer.render(&painter, canvas_rect, floorplanner);
        });
}
