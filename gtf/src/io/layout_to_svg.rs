use ordered_float::OrderedFloat;
use svg::Document;
use svg::node::element::{Circle, Group, Rectangle, Text, Title};

use cpack::entities::{BoxItem, Layout};

use crate::io::svg_util::{self, SvgDrawOptions};

/// Renders the layout: the surface, the placed footprints and (optionally) their ids.
/// Plane coordinates have their y axis pointing up, so the drawing is flipped vertically.
pub fn layout_to_svg(
    layout: &Layout,
    items: &[BoxItem],
    options: SvgDrawOptions,
    title: &str,
) -> Document {
    let surface = &layout.surface;
    let theme = options.theme.get_theme();

    let vbox = surface.rect().scale(1.05);
    let stroke_width =
        f64::min(vbox.width(), vbox.height()) * 0.001 * theme.stroke_width_multiplier;

    //draw the surface
    let surface_group = Group::new()
        .set("id", "surface")
        .add(
            Rectangle::new()
                .set("x", -surface.half_width)
                .set("y", -surface.half_height)
                .set("width", surface.width())
                .set("height", surface.height())
                .set("fill", theme.surface_fill)
                .set("stroke", "black")
                .set("stroke-width", 2.0 * stroke_width),
        )
        .add(Title::new(format!(
            "surface, {:.3} x {:.3}",
            surface.width(),
            surface.height()
        )));

    //region in which the center of the smallest placed footprint could lie
    let inset_group = {
        let mut group = Group::new().set("id", "inset_region");
        let min_radius = layout
            .placed()
            .iter()
            .map(|pc| OrderedFloat(pc.radius()))
            .min();
        if let (true, Some(rect)) = (
            options.inset_region,
            min_radius.and_then(|r| surface.inset(r.0)),
        ) {
            group = group.add(
                Rectangle::new()
                    .set("x", rect.x_min)
                    .set("y", rect.y_min)
                    .set("width", rect.width())
                    .set("height", rect.height())
                    .set("fill", "none")
                    .set("stroke", "black")
                    .set("stroke-width", stroke_width)
                    .set("stroke-dasharray", 5.0 * stroke_width),
            );
        }
        group
    };

    //draw the placed items
    let items_group = {
        let stroke_color = svg_util::change_brightness(theme.item_fill, 0.5);
        let circles = layout.placed().iter().map(|pc| {
            let id = items.get(pc.handle).map(|i| i.id);
            let mut group = Group::new()
                .add(
                    Circle::new()
                        .set("cx", pc.center().0)
                        .set("cy", pc.center().1)
                        .set("r", pc.radius())
                        .set("fill", theme.item_fill)
                        .set("fill-opacity", 0.9)
                        .set("stroke", stroke_color.as_str())
                        .set("stroke-width", stroke_width),
                )
                .add(Title::new(format!(
                    "item, id: {}, center: [{:.3}, {:.3}], radius: {:.3}",
                    id.map_or("-".to_string(), |id| id.to_string()),
                    pc.center().0,
                    pc.center().1,
                    pc.radius()
                )));
            if let (true, Some(id)) = (options.item_ids, id) {
                //labels are flipped back to be readable
                group = group.add(
                    Text::new(id.to_string())
                        .set("x", pc.center().0)
                        .set("y", -pc.center().1)
                        .set("transform", "scale(1, -1)")
                        .set("font-size", pc.radius() * 0.6)
                        .set("text-anchor", "middle")
                        .set("dominant-baseline", "middle")
                        .set("fill", theme.label_fill),
                );
            }
            group
        });
        circles.fold(Group::new().set("id", "items"), |g, c| g.add(c))
    };

    let view_box = (vbox.x_min, vbox.y_min, vbox.width(), vbox.height());
    let flipped = Group::new()
        .set("transform", "scale(1, -1)")
        .add(surface_group)
        .add(inset_group)
        .add(items_group);

    let label = format!(
        "{title} {} placed, usage: {:.3}%",
        layout.len(),
        layout.usage() * 100.0
    );
    let label = Text::new(label.trim().to_string())
        .set("x", vbox.x_min + 0.025 * vbox.width())
        .set("y", vbox.y_min + 0.02 * vbox.height())
        .set("font-size", vbox.height() * 0.015)
        .set("font-family", "monospace")
        .set("dominant-baseline", "hanging");

    Document::new()
        .set("viewBox", view_box)
        .add(flipped)
        .add(label)
}
