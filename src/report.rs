//! 端末向けの表示

use portfolio_common::{ContentItem, SiteData, site::with_last_flag, tech};

/// 投稿1件を1ブロックで表示
pub fn format_post(item: &ContentItem) -> String {
    let mut out = format!("{}  {}\n", item.display_date(), item.title);
    if !item.summary.is_empty() {
        out.push_str(&format!("    {}\n", item.summary));
    }
    let tags = item.display_tags();
    if !tags.is_empty() {
        out.push_str(&format!("    [{}]\n", tags.join("] [")));
    }
    out.push_str(&format!("    /blog/{}\n", item.slug));
    out
}

/// site.json の概要
pub fn format_site_summary(site: &SiteData) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} ({})\n", site.name, site.initials));
    if !site.description.is_empty() {
        out.push_str(&format!("  {}\n", site.description));
    }
    out.push_str(&format!("  スキル: {}\n", site.skills.len()));
    out.push_str(&format!("  職歴: {}件 / 学歴: {}件 / 資格: {}件\n",
        site.work.len(), site.education.len(), site.certifications.len()));

    out.push_str(&format!("  プロジェクト: {}件\n", site.projects.len()));
    for project in &site.projects {
        let marker = if project.active { "●" } else { "○" };
        out.push_str(&format!("    {} {} ({})\n", marker, project.title, project.dates));
    }

    out.push_str(&format!("  読書リスト: {}冊\n", site.listed_book_count()));

    if !site.career_path.is_empty() {
        let mut path = String::new();
        for (stage, last) in with_last_flag(&site.career_path) {
            path.push_str(&stage.title);
            if !last {
                path.push_str(" → ");
            }
        }
        out.push_str(&format!("  キャリア: {}\n", path));
    }

    let techs = tech::flatten(&site.tech_stack);
    out.push_str(&format!("  技術スタック: {}カテゴリ / {}項目\n", site.tech_stack.len(), techs.len()));

    out.push_str(&format!("  訪問国: {}\n", site.travels.visited.len()));
    for group in site.travels.by_region() {
        out.push_str(&format!("    {}: {}\n", group.region, group.countries.join(", ")));
    }
    out
}
