use yew::prelude::*;

struct StatCard {
    title: &'static str,
    value: &'static str,
    change: &'static str,
    icon: &'static str,
}

const STAT_CARDS: [StatCard; 3] = [
    StatCard { title: "Total Users", value: "10,483", change: "+12.3%", icon: "fas fa-users" },
    StatCard { title: "Revenue", value: "$50,234", change: "+8.2%", icon: "fas fa-arrow-trend-up" },
    StatCard { title: "Active Projects", value: "1,234", change: "+23.1%", icon: "fas fa-chart-column" },
];

/// Dashboard-style metrics band. The numbers are marketing copy, not live
/// data; the chart areas are intentionally placeholders.
#[function_component(AnalyticsSection)]
pub fn analytics_section() -> Html {
    let analytics_css = r#"
    .analytics-section {
        padding: 6rem 2rem;
        max-width: 1200px;
        margin: 0 auto;
    }
    .analytics-stats {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
        gap: 1.5rem;
        margin-bottom: 2rem;
    }
    .stat-card {
        background: var(--card-bg);
        border: 1px solid var(--card-border);
        border-radius: 12px;
        padding: 1.5rem;
        transition: all 0.3s ease;
    }
    .stat-card:hover {
        transform: translateY(-4px);
        border-color: var(--accent-soft);
    }
    .stat-card-header {
        display: flex;
        justify-content: space-between;
        align-items: center;
        color: var(--text-muted);
        font-size: 0.9rem;
        margin-bottom: 0.75rem;
    }
    .stat-card-value {
        font-size: 2rem;
        font-weight: 700;
        margin-bottom: 0.5rem;
    }
    .stat-card-change {
        color: #34d399;
        font-size: 0.85rem;
        display: flex;
        align-items: center;
        gap: 0.35rem;
    }
    .analytics-charts {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
        gap: 1.5rem;
    }
    .chart-card {
        background: var(--card-bg);
        border: 1px solid var(--card-border);
        border-radius: 12px;
        padding: 1.5rem;
    }
    .chart-card h3 {
        margin: 0 0 0.25rem 0;
    }
    .chart-card .chart-subtitle {
        color: var(--text-muted);
        font-size: 0.9rem;
        margin: 0 0 1rem 0;
    }
    .chart-placeholder {
        height: 200px;
        display: flex;
        align-items: center;
        justify-content: center;
        border: 1px dashed var(--card-border);
        border-radius: 8px;
        color: var(--text-muted);
    }
    "#;

    html! {
        <section class="analytics-section" id="analytics">
            <style>{analytics_css}</style>
            <div class="section-intro">
                <h2>{"Real-Time Analytics"}</h2>
                <p>{"Monitor your business growth with powerful analytics tools"}</p>
            </div>
            <div class="analytics-stats">
                { for STAT_CARDS.iter().map(|stat| html! {
                    <div class="stat-card">
                        <div class="stat-card-header">
                            <span>{stat.title}</span>
                            <i class={stat.icon}></i>
                        </div>
                        <div class="stat-card-value">{stat.value}</div>
                        <div class="stat-card-change">
                            <i class="fas fa-arrow-up"></i>
                            {stat.change}
                            {" from last month"}
                        </div>
                    </div>
                })}
            </div>
            <div class="analytics-charts">
                <div class="chart-card">
                    <h3>{"User Growth"}</h3>
                    <p class="chart-subtitle">{"Monthly active users over time"}</p>
                    <div class="chart-placeholder">{"[User Growth Chart]"}</div>
                </div>
                <div class="chart-card">
                    <h3>{"Revenue Overview"}</h3>
                    <p class="chart-subtitle">{"Monthly revenue statistics"}</p>
                    <div class="chart-placeholder">{"[Revenue Chart]"}</div>
                </div>
            </div>
        </section>
    }
}
