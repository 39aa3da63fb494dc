use std::fmt::Write;
use text_block::{colours, BlockMetrics, DebugOptions, FontBook, HorzAlign, Point, Raster, TextBlock, TextFormat};

fn main() {
    env_logger::init();

    let font_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "assets/DejaVuSans.ttf".to_string());
    let out = std::env::args().nth(2).unwrap_or_else(|| "demo.png".to_string());

    let mut fonts = FontBook::default();
    fonts.load_file(&font_path).expect("can load font");

    let mut raster = Raster::new(900, 700, &fonts).expect("can allocate canvas");
    raster.fill(colours::GREY);

    // formats can be stored and applied over and over
    let heading = TextFormat::outline().colour(colours::RED).scale(1.4);
    let body = TextFormat::plain().thickness(1).line_style(text_block::LineStyle::Antialiased);

    let mut metrics = BlockMetrics::default();
    {
        let mut block = TextBlock::new(&fonts, &mut raster, Point::new(30, 30));
        block.report_to(&mut metrics);
        block.set_debug(DebugOptions { draw_origin: true });

        block.apply(&heading).expect("can draw").append("Lorem ipsum\n");
        block.apply(&body).expect("can draw");
        writeln!(block, "{}", lipsum::lipsum_words(6)).expect("can buffer");
        write!(block, "tabs\tare\ttwo\tspaces\n\n").expect("can buffer");
        block
            .apply(&TextFormat::shadow_text().scale(1.2))
            .expect("can draw")
            .append("with a shadow");
        block
            .apply(&TextFormat::background().colour(colours::BLUE).no_outline())
            .expect("can draw")
            .newline()
            .append("on a plate\nline after line");
    }
    log::info!("first block covers {:?}", metrics.textbox);

    {
        let centred = TextFormat::plain()
            .align(HorzAlign::Center)
            .colour(colours::GREEN);
        let mut block = TextBlock::new(&fonts, &mut raster, Point::new(450, 600));
        block.apply(&centred).expect("can draw").append("one centred line straddles its origin");
    }

    {
        let mut block = TextBlock::new(&fonts, &mut raster, Point::new(870, 670));
        block
            .apply(
                &TextFormat::plain()
                    .align(HorzAlign::Right)
                    .bottom_left_origin(true)
                    .reverse(true)
                    .scale(0.7),
            )
            .expect("can draw")
            .append("stacked upwards\nfrom the bottom right\nlast line lowest");
    }

    raster.save(&out).expect("can save image");
}
