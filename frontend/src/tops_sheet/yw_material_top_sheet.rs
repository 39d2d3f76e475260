use gloo_timers::callback::Timeout;
use web_sys::HtmlElement;
use yew::prelude::*;

/// Full-screen sheet sliding in from the top. Visibility is the `show` class
/// on the root node, toggled by [`open_top_sheet`] / [`close_top_sheet`] so
/// the CSS transition runs.
pub struct YwMaterialTopSheet;

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
    pub node_ref: NodeRef,
    /// Raised when the user clicks the backdrop outside the content.
    #[prop_or_default]
    pub on_dismiss: Callback<()>,
}

impl Component for YwMaterialTopSheet {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_dismiss = ctx.props().on_dismiss.clone();
        let backdrop = Callback::from(move |_: MouseEvent| on_dismiss.emit(()));

        html! {
            <div class="top-sheet" ref={ctx.props().node_ref.clone()}>
                <div class="top-sheet-backdrop" onclick={backdrop}></div>
                <div class="top-sheet-content">
                    { ctx.props().children.clone() }
                </div>
            </div>
        }
    }
}

const SHOW_CLASS: &str = "show";

/// Delay between mounting new content and starting the slide-in.
const TRANSITION_DELAY_MS: u32 = 50;

pub fn open_top_sheet(top_sheet_ref: NodeRef) {
    Timeout::new(TRANSITION_DELAY_MS, move || {
        if let Some(sheet) = top_sheet_ref.cast::<HtmlElement>() {
            sheet.class_list().add_1(SHOW_CLASS).ok();
        }
    })
    .forget();
}

pub fn close_top_sheet(top_sheet_ref: NodeRef) {
    if let Some(sheet) = top_sheet_ref.cast::<HtmlElement>() {
        sheet.class_list().remove_1(SHOW_CLASS).ok();
    }
}
