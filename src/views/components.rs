use maud::{html, Markup, PreEscaped};
use rust_i18n::t;

use crate::api::{Difficulty, QuestionErrorRate, WordCloudEntry};

const CHART_JS_URL: &str = "https://cdn.jsdelivr.net/npm/chart.js@4.4.3/dist/chart.umd.min.js";
const D3_URL: &str = "https://cdn.jsdelivr.net/npm/d3@7.9.0/dist/d3.min.js";
const D3_CLOUD_URL: &str = "https://cdn.jsdelivr.net/npm/d3-cloud@1.2.7/build/d3.layout.cloud.min.js";

/// Fixed qualitative palette shared by the charts and the word cloud.
pub const CHART_COLORS: &[&str] = &[
    "#4e79a7", "#f28e2b", "#e15759", "#76b7b2", "#59a14f", "#edc948", "#b07aa1", "#ff9da7",
    "#9c755f", "#bab0ac",
];

/// htmx navigation link with href fallback + hx-get for in-page swap.
pub fn nav_link(href: &str, body: Markup) -> Markup {
    html! {
        a href=(href)
          hx-get=(href)
          hx-target="main"
          hx-push-url="true"
          hx-swap="innerHTML" {
            (body)
        }
    }
}

/// Empty-state call-to-action; list pages never render a bare empty list.
pub fn empty_state(heading: &str, body: &str, cta_label: &str, cta_url: &str) -> Markup {
    html! {
        div.empty-state {
            h5 { (heading) }
            p { (body) }
            (nav_link(cta_url, html! {
                span role="button" { (cta_label) }
            }))
        }
    }
}

pub fn question_count_chip(count: i64, locale: &str) -> Markup {
    html! {
        span."chip chip-primary" { (t!("quiz.question_chip", locale = locale, count = count)) }
    }
}

pub fn difficulty_chip(difficulty: Difficulty, locale: &str) -> Markup {
    let (key, class) = match difficulty {
        Difficulty::Easy => ("difficulty.easy", "chip chip-success"),
        Difficulty::Medium => ("difficulty.medium", "chip chip-warning"),
        Difficulty::Hard => ("difficulty.hard", "chip chip-danger"),
        Difficulty::Other => ("difficulty.unknown", "chip"),
    };
    html! {
        span.(class) { (t!(key, locale = locale)) }
    }
}

/// Two-slice proportion for the overall pie: the given rate and its
/// complement, in that order.
pub fn pie_slices(rate: f64) -> [f64; 2] {
    [rate, 1.0 - rate]
}

/// Per-question line series, in the server-supplied question order.
pub fn line_points(rates: &[QuestionErrorRate]) -> (Vec<i64>, Vec<f64>) {
    let labels = rates.iter().map(|r| r.question).collect();
    let values = rates.iter().map(|r| r.correct_rate).collect();
    (labels, values)
}

/// Lazy Chart.js loader in an inline script; `init_js` runs once the library
/// is present.
fn chart_script(init_js: &str) -> Markup {
    let script = format!(
        r#"(function(){{
var init=function(){{{init_js}}};
if(window.Chart){{init();return;}}
var s=document.createElement('script');
s.src='{CHART_JS_URL}';
s.onload=init;
document.head.appendChild(s);
}})()"#
    );

    html! {
        (PreEscaped(format!("<script>{script}</script>")))
    }
}

pub fn pie_chart(canvas_id: &str, labels: [&str; 2], slices: [f64; 2]) -> Markup {
    let labels_json = serde_json::to_string(&labels).unwrap_or_default();
    let data_json = serde_json::to_string(&slices).unwrap_or_default();
    let colors_json =
        serde_json::to_string(&[CHART_COLORS[2], CHART_COLORS[4]]).unwrap_or_default();

    let init = format!(
        r#"var ctx=document.getElementById('{canvas_id}');
if(!ctx)return;
new Chart(ctx,{{type:'pie',data:{{labels:{labels_json},datasets:[{{data:{data_json},backgroundColor:{colors_json}}}]}},options:{{responsive:true,plugins:{{legend:{{position:'bottom'}}}}}}}});"#
    );

    html! {
        div.chart-box {
            canvas id=(canvas_id) {}
        }
        (chart_script(&init))
    }
}

pub fn line_chart(canvas_id: &str, labels: &[i64], values: &[f64], series_label: &str) -> Markup {
    let labels_json = serde_json::to_string(labels).unwrap_or_default();
    let values_json = serde_json::to_string(values).unwrap_or_default();
    let series_json = serde_json::to_string(series_label).unwrap_or_default();
    let color = CHART_COLORS[0];

    let init = format!(
        r#"var ctx=document.getElementById('{canvas_id}');
if(!ctx)return;
new Chart(ctx,{{type:'line',data:{{labels:{labels_json},datasets:[{{label:{series_json},data:{values_json},borderColor:'{color}',backgroundColor:'{color}',tension:0.3}}]}},options:{{responsive:true,plugins:{{legend:{{position:'bottom'}}}},scales:{{y:{{min:0,max:100}}}}}}}});"#
    );

    html! {
        div.chart-box {
            canvas id=(canvas_id) {}
        }
        (chart_script(&init))
    }
}

/// Force-placed word cloud. The layout is recomputed from scratch on every
/// render: 800x400 canvas, padding 5, random 0/90 degree rotation per word,
/// font size equal to the term weight, random palette color per word.
pub fn word_cloud(entries: &[WordCloudEntry]) -> Markup {
    let words_json = serde_json::to_string(entries).unwrap_or_default();
    let palette_json = serde_json::to_string(CHART_COLORS).unwrap_or_default();

    let script = format!(
        r#"(function(){{
var s=document.createElement('script');
s.src='{D3_URL}';
s.onload=function(){{
var c=document.createElement('script');
c.src='{D3_CLOUD_URL}';
c.onload=function(){{
var width=800,height=400;
var palette={palette_json};
var words={words_json}.map(function(d){{return {{text:d.text,size:d.value}};}});
var layout=d3.layout.cloud()
  .size([width,height])
  .words(words)
  .padding(5)
  .rotate(function(){{return ~~(Math.random()*2)*90;}})
  .fontSize(function(d){{return d.size;}})
  .on('end',draw);
layout.start();
function draw(ws){{
var svg=d3.select('#word-cloud');
svg.selectAll('*').remove();
svg.append('g')
  .attr('transform','translate('+width/2+','+height/2+')')
  .selectAll('text')
  .data(ws)
  .enter()
  .append('text')
  .style('font-size',function(d){{return d.size+'px';}})
  .style('fill',function(){{return palette[Math.floor(Math.random()*palette.length)];}})
  .style('font-family','Impact')
  .attr('text-anchor','middle')
  .attr('transform',function(d){{return 'translate('+[d.x,d.y]+')rotate('+d.rotate+')';}})
  .text(function(d){{return d.text;}});
}}
}};
document.head.appendChild(c);
}};
document.head.appendChild(s);
}})()"#
    );

    html! {
        div.word-cloud-box {
            svg #word-cloud width="800" height="400" {}
        }
        (PreEscaped(format!("<script>{script}</script>")))
    }
}
