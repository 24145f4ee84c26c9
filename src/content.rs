//! Static Page Content
//!
//! Copy, plans, and checklist definitions rendered by the section components.

use crate::models::{
    Bullet, ChecklistItem, ChecklistStep, FeatureStyle, InfoCard, MarketingTool, NavItem,
    PayoutRow, PlanFeature, PricingPlan, SpecCard,
};

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "시장 환경", href: "#market" },
    NavItem { label: "요금제", href: "#pricing" },
    NavItem { label: "기술 규격", href: "#tech" },
    NavItem { label: "마케팅", href: "#marketing" },
    NavItem { label: "정산", href: "#payout" },
    NavItem { label: "체크리스트", href: "#checklist" },
];

// ========================
// Market
// ========================

pub const MARKET_CARDS: &[InfoCard] = &[
    InfoCard {
        title: "아티스트 중심 모델 (Artist-Centric)",
        icon: "fa-users-viewfinder",
        accent: "text-sky-400",
        bullets: &[
            Bullet { lead: "정산 임계치:", text: "연간 최소 1,000회 스트리밍 및 고유 리스너 확보 필요" },
            Bullet { lead: "품질 필터링:", text: "화이트 노이즈 등 기능성 오디오 정산 제외" },
            Bullet { lead: "가중치:", text: "진성 팬의 스트리밍에 더 높은 로열티 배분" },
        ],
    },
    InfoCard {
        title: "AI 음원 규제 및 Disclosure",
        icon: "fa-robot",
        accent: "text-indigo-400",
        bullets: &[
            Bullet { lead: "AI 태깅 의무화:", text: "DDEX 표준에 따른 AI 참여 정보 명시 필요 [1, 2]" },
            Bullet { lead: "사칭 금지:", text: "특정 아티스트 목소리 무단 복제 시 배포 반려" },
            Bullet { lead: "권리 증명:", text: "유료 플랜을 통한 상업적 권리 확보 필수 [3, 4]" },
        ],
    },
];

// ========================
// Pricing
// ========================

pub const PRICING_PLANS: &[PricingPlan] = &[
    PricingPlan {
        name: "Musician",
        price_usd: 24.99,
        tagline: "취미 아티스트용 기본 플랜",
        ribbon: None,
        features: &[
            PlanFeature { text: "무제한 음원 업로드", style: FeatureStyle::Included },
            PlanFeature { text: "아티스트 1인", style: FeatureStyle::Included },
            PlanFeature { text: "로열티 100% 정산", style: FeatureStyle::Included },
            PlanFeature { text: "발매일 지정 불가", style: FeatureStyle::Excluded },
            PlanFeature { text: "일일 통계 미제공", style: FeatureStyle::Excluded },
        ],
    },
    PricingPlan {
        name: "Musician Plus",
        price_usd: 44.99,
        tagline: "전략적 마케팅 필수",
        ribbon: Some("MOST POPULAR"),
        features: &[
            PlanFeature { text: "발매일/예약일 지정", style: FeatureStyle::Highlight("font-semibold text-sky-400") },
            PlanFeature { text: "아티스트 2인", style: FeatureStyle::Included },
            PlanFeature { text: "상세 일일 통계", style: FeatureStyle::Included },
            PlanFeature { text: "커스텀 레이블명", style: FeatureStyle::Highlight("text-sky-400") },
            PlanFeature { text: "iTunes 가격 설정", style: FeatureStyle::Included },
        ],
    },
    PricingPlan {
        name: "Ultimate",
        price_usd: 89.99,
        tagline: "레이블 및 대규모 관리",
        ribbon: None,
        features: &[
            PlanFeature { text: "아티스트 5~100인", style: FeatureStyle::Included },
            PlanFeature { text: "1TB Instant Share", style: FeatureStyle::Included },
            PlanFeature { text: "플레이리스트 연락처 정보", style: FeatureStyle::Included },
            PlanFeature { text: "RIAA 골드/플래티넘 모니터링", style: FeatureStyle::Included },
            PlanFeature { text: "Artist Protection", style: FeatureStyle::Highlight("text-indigo-400") },
        ],
    },
];

// ========================
// Tech specs
// ========================

/// Optional Dolby Atmos add-on price shown on the audio card
pub const DOLBY_ATMOS_USD: f64 = 26.99;

pub const SPEC_CARDS: &[SpecCard] = &[
    SpecCard {
        title: "Spotify Canvas",
        decoration: "decoration-green-500",
        lead: "공유 횟수 145% 증가 효과",
        lines: &["비율: 9:16 (세로형)", "길이: 3~8초", "형식: MP4 / JPG", "사운드: 오디오 트랙 없음"],
    },
    SpecCard {
        title: "Apple Motion Art",
        decoration: "decoration-indigo-500",
        lead: "첫 프레임과 정적 아트 일치 필수 [8, 5, 1]",
        lines: &[
            "3:4 (iPhone/Android) [8, 5, 1]",
            "1:1 (iPad/Mac/TV) [8, 5, 1]",
            "길이: 15~35초 [8, 5, 1]",
            "코덱: H.264 / ProRes 422 [8, 5, 1]",
        ],
    },
];

// ========================
// Payout simulation
// ========================

pub const PAYOUT_ROWS: &[PayoutRow] = &[
    PayoutRow {
        platform: "Spotify",
        basis: "100,000 Streams",
        amount_usd: 400.0,
        amount_class: "text-sky-400",
        note_lead: "평균",
        unit_usd: Some(0.004),
        note_tail: "적용",
    },
    PayoutRow {
        platform: "Apple Music",
        basis: "20,000 Streams",
        amount_usd: 160.0,
        amount_class: "text-indigo-400",
        note_lead: "평균",
        unit_usd: Some(0.008),
        note_tail: "적용 (고단가)",
    },
    PayoutRow {
        platform: "TikTok",
        basis: "1,000 Creations",
        amount_usd: 30.0,
        amount_class: "text-pink-400",
        note_lead: "영상 생성당",
        unit_usd: Some(0.03),
        note_tail: "정산",
    },
    PayoutRow {
        platform: "YouTube Content ID",
        basis: "50,000 Views (UGC)",
        amount_usd: 50.0,
        amount_class: "text-red-500",
        note_lead: "UGC 광고 수익 80% 정산",
        unit_usd: None,
        note_tail: "",
    },
];

/// Estimated six-month total across all rows
pub fn payout_total(rows: &[PayoutRow]) -> f64 {
    rows.iter().map(|row| row.amount_usd).sum()
}

// ========================
// Marketing
// ========================

pub const HYPERFOLLOW_TIPS: &[MarketingTool] = &[
    MarketingTool { step: 1, description: "팬의 이메일 수집을 통한 직접 마케팅 채널 확보 [15, 16, 17]" },
    MarketingTool { step: 2, description: "소셜 미디어 유입 플랫폼(FB, IG, TikTok) 데이터 분석 [12, 15, 18]" },
    MarketingTool { step: 3, description: "전환 최적화를 위한 픽셀 연동 및 광고 타겟팅 데이터로 활용 [13, 12, 19]" },
];

// ========================
// Release checklist
// ========================

pub const CHECKLIST_STEPS: &[ChecklistStep] = &[
    ChecklistStep {
        badge: "D-42",
        title: "콘텐츠 준비",
        items: &[
            ChecklistItem { id: "d42-wav", text: "최종 WAV 마스터 (24-bit)" },
            ChecklistItem { id: "d42-art", text: "앨범 아트 (3000px)" },
            ChecklistItem { id: "d42-canvas", text: "Spotify Canvas 제작" },
            ChecklistItem { id: "d42-motion", text: "Apple Motion Art 제작" },
        ],
    },
    ChecklistStep {
        badge: "D-28",
        title: "업로드 및 설정",
        items: &[
            ChecklistItem { id: "d28-upload", text: "금요일 발매일 지정 업로드" },
            ChecklistItem { id: "d28-meta", text: "메타데이터/크레딧 정밀 입력 [20]" },
            ChecklistItem { id: "d28-split", text: "Splits 수익 배분 초대 [11]" },
            ChecklistItem { id: "d28-contentid", text: "YouTube Content ID 신청 [21]" },
        ],
    },
    ChecklistStep {
        badge: "D-14",
        title: "사전 마케팅",
        items: &[
            ChecklistItem { id: "d14-hyper", text: "HyperFollow 페이지 공개" },
            ChecklistItem { id: "d14-presave", text: "Pre-save 캠페인 집중 홍보" },
            ChecklistItem { id: "d14-pitch", text: "Spotify 에디토리얼 피칭 [20, 22, 23]" },
            ChecklistItem { id: "d14-ads", text: "소셜 광고 집행 시작" },
        ],
    },
    ChecklistStep {
        badge: "Day 1+",
        title: "정산 및 분석",
        items: &[
            ChecklistItem { id: "day1-tax", text: "W-8BEN 세금 양식 완료" },
            ChecklistItem { id: "day1-stats", text: "실시간 통계 유입 분석 [6]" },
            ChecklistItem { id: "day1-retarget", text: "주요 국가 마케팅 리타겟팅" },
            ChecklistItem { id: "day1-payout", text: "수익 인출 수단 연동 [24]" },
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_checklist_ids_are_unique() {
        let mut seen = HashSet::new();
        for step in CHECKLIST_STEPS {
            for item in step.items {
                assert!(seen.insert(item.id), "duplicate checklist id {}", item.id);
            }
        }
        assert_eq!(seen.len(), 16);
    }

    #[test]
    fn test_payout_total() {
        assert_eq!(payout_total(PAYOUT_ROWS), 640.0);
        assert_eq!(payout_total(&[]), 0.0);
    }

    #[test]
    fn test_nav_targets_are_anchors() {
        assert!(NAV_ITEMS.iter().all(|item| item.href.starts_with('#')));
    }
}
