#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStage {
    LoadingDocument,
    SolvingCombustion,
    SizingNozzle,
    SizingInjector,
    SizingPlumbing,
    SavingDocument,
    Completed,
}

impl From<es_sizing::Stage> for RunStage {
    fn from(stage: es_sizing::Stage) -> Self {
        match stage {
            es_sizing::Stage::Nozzle => RunStage::SizingNozzle,
            es_sizing::Stage::Injector => RunStage::SizingInjector,
            es_sizing::Stage::Plumbing => RunStage::SizingPlumbing,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RunProgressEvent {
    pub stage: RunStage,
    pub elapsed_wall_s: f64,
    pub message: Option<String>,
}

impl RunProgressEvent {
    pub fn stage(stage: RunStage, elapsed_wall_s: f64, message: Option<String>) -> Self {
        Self {
            stage,
            elapsed_wall_s,
            message,
        }
    }
}
