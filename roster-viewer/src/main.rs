use roster_viewer::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
