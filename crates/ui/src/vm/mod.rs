mod assistant_vm;
mod calendar_vm;
mod login_vm;
mod progress_vm;
mod subject_vm;

pub use assistant_vm::{AssistantState, assistant_state_from_result};
pub use calendar_vm::{CalendarVm, DayCellVm};
pub use login_vm::LoginVm;
pub use progress_vm::{ActivityRowVm, ChartPointVm, ProgressBoardVm, CHART_HEIGHT, CHART_WIDTH};
pub use subject_vm::{SectionTabVm, SubjectHeaderVm, map_section_tabs};
