use text_block::layout::{beside, relative_to, DEFAULT_PAD};
use text_block::{colours, FontBook, HorzAlign, RectStroke, Raster, Rect, TextBlock, TextFormat, VertAlign};
use text_block::{DrawTarget, LineStyle};

fn main() {
    env_logger::init();

    let font_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "assets/DejaVuSans.ttf".to_string());
    let out = std::env::args()
        .nth(2)
        .unwrap_or_else(|| "anchors.png".to_string());

    let mut fonts = FontBook::default();
    fonts.load_file(&font_path).expect("can load font");

    let mut raster = Raster::new(800, 800, &fonts).expect("can allocate canvas");
    raster.fill(colours::WHITE);

    let frame = Rect::new(150, 150, 500, 500);
    raster
        .draw_rectangle(
            frame.tl(),
            frame.br(),
            colours::BLUE,
            RectStroke::Outline(1),
            LineStyle::Aliased,
        )
        .expect("can draw frame");

    let style = TextFormat::plain().scale(0.6).thickness(1);
    let verts = [VertAlign::Top, VertAlign::Mid, VertAlign::Bottom];
    let horzs = [HorzAlign::Left, HorzAlign::Center, HorzAlign::Right];

    for inside in [false, true] {
        for vert in verts {
            for horz in horzs {
                let label = format!("{vert:?} {horz:?}\n{}", if inside { "inside" } else { "outside" });
                let placement = relative_to(frame, vert, horz, inside, DEFAULT_PAD);
                let mut block = TextBlock::anchored(&fonts, &mut raster, placement);
                block
                    .apply(&style)
                    .expect("can draw")
                    .append(&label);
            }
        }
    }

    // beside the frame, nudged off its corners
    for (vert, blo) in [(VertAlign::Top, false), (VertAlign::Bottom, true)] {
        for horz in [HorzAlign::Left, HorzAlign::Right] {
            let placement = beside(frame, horz, vert, false, blo, DEFAULT_PAD, 4);
            let mut block = TextBlock::anchored(&fonts, &mut raster, placement);
            block
                .apply(&style.clone().colour(colours::RED))
                .expect("can draw")
                .append("beside\nthe frame");
        }
    }

    raster.save(&out).expect("can save image");
}
