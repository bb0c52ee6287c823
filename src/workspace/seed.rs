//! Embedded demo records for the technician workspace.
//!
//! Every collection starts from these Persian-language seed rows; state
//! lives for the process lifetime, so each run begins here. Seed ids are
//! fixed strings (runtime-created entities get generated ids instead).

use chrono::Utc;

use crate::models::{
    ActionItem, BoardItem, BoardStatus, CalendarEvent, Case, CaseStage, Channel, ChecklistItem,
    FeatureRef, GateStatus, Island, JourneyTask, Project, QualityGate, ReportItem, ReportStage,
    Sensitivity, TeamStream,
};

use super::calendar::PERIOD_LENGTH;
use super::{CalendarBoard, ChecklistRegistry, JourneyBoard, ReportDesk, Workspace};

/// The workspace tab carrying the journey islands.
pub const OVERVIEW_TAB: &str = "overview";

fn case(
    id: &str,
    external_ref: &str,
    title: &str,
    technician: &str,
    stage: CaseStage,
    due_label: &str,
) -> Case {
    Case::new(
        id.to_string(),
        external_ref.to_string(),
        title.to_string(),
        technician.to_string(),
        stage,
        due_label.to_string(),
    )
}

fn board_item(
    id: &str,
    external_ref: &str,
    title: &str,
    owner: &str,
    status: BoardStatus,
    location: &str,
    due_label: &str,
    channel: Channel,
) -> BoardItem {
    let now = Utc::now();
    BoardItem {
        id: id.to_string(),
        external_ref: external_ref.to_string(),
        title: title.to_string(),
        owner: owner.to_string(),
        status,
        location: location.to_string(),
        due_label: due_label.to_string(),
        channel,
        created_at: now,
        updated_at: now,
    }
}

fn action(id: &str, title: &str, owner: &str, due_label: &str, channel: Channel) -> ActionItem {
    ActionItem {
        id: id.to_string(),
        title: title.to_string(),
        owner: owner.to_string(),
        due_label: due_label.to_string(),
        channel,
        created_at: Utc::now(),
    }
}

fn event(id: &str, day: u8, label: &str, channel: Channel) -> CalendarEvent {
    CalendarEvent {
        id: id.to_string(),
        day,
        label: label.to_string(),
        channel,
        created_at: Utc::now(),
    }
}

#[allow(clippy::too_many_arguments)]
fn report(
    id: &str,
    external_ref: &str,
    subject: &str,
    owner: &str,
    stage: ReportStage,
    due_label: &str,
    channel: Channel,
    completeness: u8,
    attachments: u32,
    sensitivity: Sensitivity,
) -> ReportItem {
    let now = Utc::now();
    ReportItem {
        id: id.to_string(),
        external_ref: external_ref.to_string(),
        subject: subject.to_string(),
        owner: owner.to_string(),
        stage,
        due_label: due_label.to_string(),
        channel,
        completeness,
        attachments,
        sensitivity,
        created_at: now,
        updated_at: now,
    }
}

fn gate(id: &str, title: &str, detail: &str, status: GateStatus) -> QualityGate {
    QualityGate {
        id: id.to_string(),
        title: title.to_string(),
        detail: detail.to_string(),
        status,
        created_at: Utc::now(),
    }
}

fn stream(
    id: &str,
    title: &str,
    focus: &str,
    owner: &str,
    progress: u8,
    channel: Channel,
) -> TeamStream {
    TeamStream {
        id: id.to_string(),
        title: title.to_string(),
        focus: focus.to_string(),
        owner: owner.to_string(),
        progress,
        channel,
    }
}

fn feature(id: &str, label: &str) -> FeatureRef {
    FeatureRef {
        id: id.to_string(),
        label: label.to_string(),
    }
}

fn check(id: &str, label: &str, done: bool) -> ChecklistItem {
    ChecklistItem {
        id: id.to_string(),
        label: label.to_string(),
        done,
        note: None,
    }
}

fn check_note(id: &str, label: &str, done: bool, note: &str) -> ChecklistItem {
    ChecklistItem {
        id: id.to_string(),
        label: label.to_string(),
        done,
        note: Some(note.to_string()),
    }
}

fn journey_task(id: &str, title: &str, owner: &str) -> JourneyTask {
    JourneyTask {
        id: id.to_string(),
        title: title.to_string(),
        owner: owner.to_string(),
    }
}

fn cases() -> Vec<Case> {
    vec![
        case(
            "wf-1",
            "UTN-2045",
            "بدنه / لرزش غیرعادی",
            "سارا رحیمی",
            CaseStage::FieldInspection,
            "۲ ساعت",
        ),
        case(
            "wf-2",
            "UTN-1980",
            "ماشین‌آلات / نشت روغن",
            "محمد رضوی",
            CaseStage::AwaitingHandover,
            "تا پایان امروز",
        ),
        case(
            "wf-3",
            "UTN-2101",
            "الکتریک / قطع مقطعی",
            "مهدی سلیمانی",
            CaseStage::LabAnalysis,
            "فردا صبح",
        ),
        case(
            "wf-4",
            "UTN-1766",
            "سیستم عمومی / به‌روزرسانی مدارک",
            "فاطمه کریمی",
            CaseStage::Documentation,
            "در حال اقدام",
        ),
    ]
}

fn board() -> Vec<BoardItem> {
    vec![
        board_item(
            "board-1",
            "UTN-2045",
            "بدنه · لرزش غیرعادی",
            "ندا شریفی",
            BoardStatus::InProgress,
            "عرشه A / اسکله ۳",
            "امروز · ۱۴:۳۰",
            Channel::Field,
        ),
        board_item(
            "board-2",
            "UTN-1980",
            "نشت روغن · پایش آنلاین",
            "محمد رضوی",
            BoardStatus::AwaitingQa,
            "اتاق ماشین‌آلات",
            "امروز · ۱۷:۰۰",
            Channel::QualityControl,
        ),
        board_item(
            "board-3",
            "UTN-2101",
            "بارگیری بردهای الکتریک",
            "مهدی سلیمانی",
            BoardStatus::ReadyToShip,
            "کارگاه مرکزی",
            "فردا · ۰۹:۳۰",
            Channel::Workshop,
        ),
        board_item(
            "board-4",
            "UTN-1766",
            "تکمیل مستندات سیستم عمومی",
            "فاطمه کریمی",
            BoardStatus::NeedsInfo,
            "اتاق داده ایمن",
            "فردا · ۱۲:۰۰",
            Channel::Documentation,
        ),
    ]
}

fn actions() -> Vec<ActionItem> {
    vec![
        action(
            "action-1",
            "ارسال گزارش لرزش به QA",
            "ندا شریفی",
            "۲ ساعت دیگر",
            Channel::Qa,
        ),
        action(
            "action-2",
            "هم‌رسانی نقشه‌های اصلاحی",
            "محمد رضوی",
            "پیش از پایان شیفت",
            Channel::Workshop,
        ),
        action(
            "action-3",
            "به‌روزرسانی وضعیت در برد مدیران",
            "مهدی سلیمانی",
            "تا ساعت ۲۰",
            Channel::Management,
        ),
    ]
}

fn streams() -> Vec<TeamStream> {
    vec![
        stream(
            "stream-body",
            "هماهنگی بدنه",
            "کابل‌کشی + تست لرزش",
            "سارا رحیمی",
            72,
            Channel::Field,
        ),
        stream(
            "stream-electric",
            "شبکه الکتریک",
            "بردهای کنترل و نرم‌افزار",
            "مهدی سلیمانی",
            58,
            Channel::Workshop,
        ),
        stream(
            "stream-field",
            "میدانی و بهره‌بردار",
            "جلسات حضوری + هماهنگی QA",
            "ندا شریفی",
            81,
            Channel::QualityControl,
        ),
    ]
}

fn calendar() -> CalendarBoard {
    let mut cal = CalendarBoard::new(PERIOD_LENGTH);
    cal.events = vec![
        event("cal-23-1", 23, "واکشی کابل بدنه", Channel::Field),
        event("cal-24-1", 24, "بازرسی مشترک QA", Channel::Qa),
        event("cal-25-1", 25, "جلسه هماهنگی پمپ", Channel::Coordination),
        event("cal-25-2", 25, "تحویل فاز اول", Channel::Management),
        event("cal-27-1", 27, "تست میدانی الکتریک", Channel::Workshop),
        event("cal-28-1", 28, "همایش بهره‌بردار", Channel::Operator),
        event("cal-29-1", 29, "به‌روزرسانی مستندات", Channel::Documentation),
    ];
    cal
}

fn desk() -> ReportDesk {
    let mut desk = ReportDesk::new();
    desk.items = vec![
        report(
            "report-1",
            "UTN-2045",
            "ممیزی لرزش بدنه · نسخه ۳",
            "ندا شریفی",
            ReportStage::PendingApproval,
            "امروز · ۱۸:۰۰",
            Channel::Qa,
            78,
            6,
            Sensitivity::Confidential,
        ),
        report(
            "report-2",
            "UTN-1980",
            "تحلیل نشتی روغن و CAPA",
            "محمد رضوی",
            ReportStage::Analyzing,
            "امروز · ۲۱:۰۰",
            Channel::Workshop,
            52,
            3,
            Sensitivity::Normal,
        ),
        report(
            "report-3",
            "UTN-2101",
            "خلاصه مدیریتی شبکه الکتریک",
            "مهدی سلیمانی",
            ReportStage::ReadyToPublish,
            "فردا · ۱۰:۰۰",
            Channel::Documentation,
            91,
            4,
            Sensitivity::Normal,
        ),
        report(
            "report-4",
            "UTN-1766",
            "به‌روزرسانی مستندات عمومی",
            "فاطمه کریمی",
            ReportStage::Shared,
            "دیروز · ۱۶:۰۰",
            Channel::Field,
            100,
            8,
            Sensitivity::Confidential,
        ),
        report(
            "report-5",
            "UTN-2120",
            "ارزیابی عملکرد پمپ‌های اسکله ۲",
            "سارا رحیمی",
            ReportStage::PendingApproval,
            "فردا · ۱۴:۳۰",
            Channel::Qa,
            67,
            2,
            Sensitivity::Normal,
        ),
    ];
    desk.gates = vec![
        gate(
            "gate-data",
            "اعتبارسنجی داده خام",
            "۵۶۹ قرائت حسگر بدون خطا",
            GateStatus::Passed,
        ),
        gate(
            "gate-field",
            "ترکیب لاگ میدانی",
            "۲ یادداشت در صف تایید",
            GateStatus::Pending,
        ),
        gate(
            "gate-risk",
            "بررسی مدیریت ریسک",
            "منتظر امضای مدیر فنی",
            GateStatus::Warning,
        ),
    ];
    desk
}

fn standard_features() -> Vec<FeatureRef> {
    vec![
        feature("overview", "نمای کلی"),
        feature("docs", "مدارک"),
        feature("inspections", "بازرسی‌ها"),
        feature("certificates", "گواهینامه‌ها"),
        feature("stamps", "مهرها"),
        feature("capa", "CAPA"),
    ]
}

fn projects() -> Vec<Project> {
    vec![
        Project {
            id: "utn-2045-workbench".to_string(),
            external_ref: "UTN-2045".to_string(),
            title: "بدنه کشتی آذرین · نسخه ۳ نقشه".to_string(),
            owner: "ندا شریفی".to_string(),
            focus: "بازرسی بدنه + هم‌ترازی سازه".to_string(),
            due_label: "امروز · ۱۷:۳۰".to_string(),
            progress: 68,
            features: standard_features(),
        },
        Project {
            id: "utn-1980-workbench".to_string(),
            external_ref: "UTN-1980".to_string(),
            title: "تحلیل نشتی سیستم روغن".to_string(),
            owner: "محمد رضوی".to_string(),
            focus: "بازرسی میدانی + تحلیل آزمایشگاه".to_string(),
            due_label: "فردا · ۰۹:۴۵".to_string(),
            progress: 54,
            features: standard_features(),
        },
        Project {
            id: "utn-2101-workbench".to_string(),
            external_ref: "UTN-2101".to_string(),
            title: "شبکه الکتریک و اتوماسیون".to_string(),
            owner: "مهدی سلیمانی".to_string(),
            focus: "نقشه‌برداری کابل + تایید نرم‌افزار".to_string(),
            due_label: "فردا · ۱۵:۲۰".to_string(),
            progress: 81,
            features: standard_features(),
        },
    ]
}

fn checklists() -> ChecklistRegistry {
    let mut reg = ChecklistRegistry::new();

    let p = "utn-2045-workbench";
    reg.insert_template(
        p,
        "overview",
        vec![
            check_note(
                "utn2045-overview-check-1",
                "تایید نسخه ۳ نقشه در اتاق داده",
                true,
                "امضا شده توسط QA",
            ),
            check_note(
                "utn2045-overview-check-2",
                "ثبت قرائت حسگر لرزش (۴ نمونه)",
                false,
                "۲ نمونه باقی‌مانده",
            ),
            check("utn2045-overview-check-3", "هماهنگی بازدید با بهره‌بردار", false),
        ],
    );
    reg.insert_template(
        p,
        "docs",
        vec![
            check("utn2045-docs-check-1", "بازبینی PDF مهر شده", true),
            check("utn2045-docs-check-2", "آپلود نسخه DWG در اتاق داده", true),
            check("utn2045-docs-check-3", "الحاق لاگ QA به بسته مدارک", false),
        ],
    );
    reg.insert_template(
        p,
        "inspections",
        vec![
            check("utn2045-inspection-check-1", "ثبت عکس‌های لرزش در پورتال", true),
            check_note(
                "utn2045-inspection-check-2",
                "ارسال نمونه فلز به آزمایشگاه",
                false,
                "Pickup ساعت ۱۶",
            ),
            check("utn2045-inspection-check-3", "به‌روزرسانی نتایج در CAPA", false),
        ],
    );
    reg.insert_template(
        p,
        "certificates",
        vec![
            check("utn2045-cert-check-1", "بررسی ترجمه رسمی", true),
            check("utn2045-cert-check-2", "الحاق مهر دیجیتال به بسته", false),
            check("utn2045-cert-check-3", "ارسال درخواست به AsiaClass", false),
        ],
    );
    reg.insert_template(
        p,
        "stamps",
        vec![
            check("utn2045-stamp-check-1", "بررسی آخرین تغییرات نقشه", true),
            check("utn2045-stamp-check-2", "هماهنگی امضا با دفتر QA", false),
            check("utn2045-stamp-check-3", "تایید دو مرحله‌ای در AsiaClass", false),
        ],
    );
    reg.insert_template(
        p,
        "capa",
        vec![
            check("utn2045-capa-check-1", "تکمیل فرم CAPA در سیستم", true),
            check("utn2045-capa-check-2", "اتصال شواهد تصویری", false),
            check("utn2045-capa-check-3", "تایید نهایی توسط مدیر کیفیت", false),
        ],
    );

    let p = "utn-1980-workbench";
    reg.insert_template(
        p,
        "overview",
        vec![
            check("utn1980-overview-check-1", "بررسی لاگ فشار آنلاین", true),
            check(
                "utn1980-overview-check-2",
                "هماهنگی تیم کارگاه برای تعویض اورینگ",
                false,
            ),
            check("utn1980-overview-check-3", "جمع‌بندی برای ارسال به QA", false),
        ],
    );
    reg.insert_template(
        p,
        "docs",
        vec![
            check("utn1980-docs-check-1", "آپلود عکس اورینگ", true),
            check("utn1980-docs-check-2", "تطبیق گزارش فشار با سنسور", false),
            check("utn1980-docs-check-3", "بررسی مهر AsiaClass", true),
        ],
    );
    reg.insert_template(
        p,
        "inspections",
        vec![
            check("utn1980-inspection-check-1", "هماهنگی با آزمایشگاه سیار", true),
            check("utn1980-inspection-check-2", "ثبت لاگ دمای سیال", false),
            check("utn1980-inspection-check-3", "به‌روزرسانی فرم MT", false),
        ],
    );
    reg.insert_template(
        p,
        "certificates",
        vec![
            check("utn1980-cert-check-1", "پیوست مهر دیجیتال", true),
            check("utn1980-cert-check-2", "بازبینی ترجمه", false),
            check("utn1980-cert-check-3", "ارسال برای مشتری", false),
        ],
    );
    reg.insert_template(
        p,
        "stamps",
        vec![
            check("utn1980-stamp-check-1", "تایید تغییرات نقشه", true),
            check("utn1980-stamp-check-2", "هماهنگی با AsiaClass", false),
            check("utn1980-stamp-check-3", "ثبت امضای سرپرست", false),
        ],
    );
    reg.insert_template(
        p,
        "capa",
        vec![
            check("utn1980-capa-check-1", "به‌روزرسانی عکس قبل/بعد", true),
            check("utn1980-capa-check-2", "ثبت تایید مدیر پروژه", false),
            check("utn1980-capa-check-3", "ارسال گزارش به مشتری", false),
        ],
    );

    let p = "utn-2101-workbench";
    reg.insert_template(
        p,
        "overview",
        vec![
            check("utn2101-overview-check-1", "تکمیل تست کابل مسیر C", true),
            check("utn2101-overview-check-2", "مرور Firmware v5.4", false),
            check("utn2101-overview-check-3", "هماهنگی با تیم نرم‌افزار", false),
        ],
    );
    reg.insert_template(
        p,
        "docs",
        vec![
            check("utn2101-docs-check-1", "آپلود نسخه جدید Firmware", false),
            check("utn2101-docs-check-2", "ضمیمه چک‌لیست QA", true),
            check("utn2101-docs-check-3", "بررسی دسترسی AsiaClass", true),
        ],
    );
    reg.insert_template(
        p,
        "inspections",
        vec![
            check("utn2101-inspection-check-1", "جمع‌آوری عکس تابلو 1C", true),
            check("utn2101-inspection-check-2", "تایید نتایج تست عایقی", true),
            check("utn2101-inspection-check-3", "ثبت امضای مشترک QA", false),
        ],
    );
    reg.insert_template(
        p,
        "certificates",
        vec![
            check("utn2101-cert-check-1", "تکمیل تست نرم‌افزار", false),
            check("utn2101-cert-check-2", "پیگیری امضا از AsiaClass", false),
            check("utn2101-cert-check-3", "ضمیمه گزارش QA", true),
        ],
    );
    reg.insert_template(
        p,
        "stamps",
        vec![
            check("utn2101-stamp-check-1", "بررسی Firmware v5.4", true),
            check("utn2101-stamp-check-2", "هماهنگی با تیم QA", true),
            check("utn2101-stamp-check-3", "ارسال برای امضای AsiaClass", false),
        ],
    );
    reg.insert_template(
        p,
        "capa",
        vec![
            check("utn2101-capa-check-1", "ارسال گزارش نهایی", false),
            check("utn2101-capa-check-2", "به‌روزرسانی وضعیت در داشبورد", true),
            check("utn2101-capa-check-3", "تایید مشتری", false),
        ],
    );

    reg
}

fn journeys() -> JourneyBoard {
    let mut board = JourneyBoard::new();
    board.insert_tab(
        OVERVIEW_TAB,
        vec![
            Island {
                id: "island-receive".to_string(),
                title: CaseStage::PendingIntake.label().to_string(),
                tasks: vec![
                    journey_task(
                        "jt-1",
                        "پروژه بدنه UTN-2045 منتظر تایید طراحی است",
                        "سارا رحیمی",
                    ),
                    journey_task("jt-2", "ارسال خلاصه بازرسی برای یگان ۳", "علی محمدی"),
                    journey_task("jt-3", "آماده‌سازی گزارش برای تماس مدیران", "فاطمه کریمی"),
                ],
            },
            Island {
                id: "island-field".to_string(),
                title: CaseStage::FieldInspection.label().to_string(),
                tasks: vec![
                    journey_task("jt-4", "بدنه / لرزش غیرعادی", "سارا رحیمی"),
                    journey_task("jt-5", "الکتریک / قطع مقطعی", "مهدی سلیمانی"),
                ],
            },
            Island {
                id: "island-handover".to_string(),
                title: CaseStage::Documentation.label().to_string(),
                tasks: vec![journey_task(
                    "jt-6",
                    "سیستم عمومی / به‌روزرسانی مدارک",
                    "فاطمه کریمی",
                )],
            },
        ],
    );
    board
}

/// Build the fully seeded workspace.
pub fn workspace() -> Workspace {
    let mut ws = Workspace::new();
    ws.cases = cases();
    ws.board = board();
    ws.actions = actions();
    ws.streams = streams();
    ws.projects = projects();
    ws.calendar = calendar();
    ws.checklists = checklists();
    ws.desk = desk();
    ws.journeys = journeys();
    ws
}
