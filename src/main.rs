use subject_quiz::QuizApp;
use subject_quiz::data::read_config;

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    env_logger::init();

    let config = read_config().map_err(|err| eframe::Error::AppCreation(Box::new(err)))?;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 820.0])
            .with_min_inner_size([320.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Quiz",
        options,
        Box::new(move |_cc| Ok(Box::new(QuizApp::new(config)))),
    )
}

#[cfg(target_arch = "wasm32")]
fn main() {
    use wasm_bindgen::JsCast;

    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));

    let web_options = eframe::WebOptions::default();
    wasm_bindgen_futures::spawn_local(async move {
        let config = match read_config() {
            Ok(config) => config,
            Err(err) => {
                log::error!("Invalid quiz config: {err}");
                return;
            }
        };
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("No document available to mount the app");
            return;
        };
        let canvas = match document
            .get_element_by_id("the_canvas_id")
            .and_then(|el| el.dyn_into::<web_sys::HtmlCanvasElement>().ok())
        {
            Some(canvas) => canvas,
            None => {
                log::error!("Element #the_canvas_id is missing or is not a canvas");
                return;
            }
        };

        let start_result = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(move |_cc| Ok(Box::new(QuizApp::new(config)))),
            )
            .await;

        if let Err(e) = start_result {
            log::error!("Failed to start eframe: {e:?}");
        }
    });
}
