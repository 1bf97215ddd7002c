use crate::render::enums::render_step::RenderStep;
use crate::render::structs::render_result::RenderResult;

impl RenderStep {
    pub fn into_result(self) -> Option<RenderResult> {
        match self {
            RenderStep::Rendered(result) => Some(result),
            RenderStep::Decided(_) => None,
        }
    }

    pub fn is_rendered(&self) -> bool {
        matches!(self, RenderStep::Rendered(_))
    }
}

impl From<RenderResult> for RenderStep {
    fn from(result: RenderResult) -> Self {
        RenderStep::Rendered(result)
    }
}
