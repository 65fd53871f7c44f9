//! Inline stylesheet for the dashboard page

pub const STYLESHEET: &str = r#"
* { box-sizing: border-box; }
body {
    margin: 0;
    padding: 24px 48px;
    min-height: 100vh;
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
    background: linear-gradient(180deg, #0f0b1c, #1a1033);
    color: #ffffff;
}
h1 { text-align: center; font-size: 48px; margin: 0 0 5px; }
h2 { font-size: 24px; margin: 24px 0 16px; }
.subtitle {
    text-align: center;
    font-size: 18px;
    font-weight: 600;
    color: #cbb6ff;
    margin-bottom: 25px;
    letter-spacing: 0.5px;
}
.tiles { display: grid; grid-template-columns: repeat(3, 1fr); gap: 24px; }
.metric-card {
    background: #1f1636;
    padding: 20px;
    border-radius: 16px;
    text-align: center;
    box-shadow: 0 6px 18px rgba(128, 0, 255, 0.35);
}
.metric-title { font-size: 15px; color: #cbb6ff; }
.metric-value { font-size: 38px; font-weight: bold; color: #a855ff; }
.big-button { display: flex; justify-content: center; margin-top: 20px; }
.big-button button {
    width: 45%;
    height: 50px;
    font-size: 16px;
    font-weight: 600;
    border-radius: 10px;
    background-color: #1f1636;
    color: #cbb6ff;
    border: 1px solid rgba(168, 85, 247, 0.5);
    cursor: pointer;
}
.big-button button:hover, .big-button button.active {
    background-color: #2a1f4a;
    border-color: #a855ff;
    color: #ffffff;
}
.divider { border: none; border-top: 1px solid rgba(203, 182, 255, 0.2); margin: 32px 0 8px; }
.grid { display: grid; gap: 16px; align-items: start; }
.grid-1 { grid-template-columns: 1fr; }
.grid-2 { grid-template-columns: repeat(2, 1fr); }
.grid-3 { grid-template-columns: repeat(3, 1fr); }
.grid-4 { grid-template-columns: repeat(4, 1fr); }
.card {
    background: #1f1636;
    border-radius: 12px;
    padding: 10px;
    margin-bottom: 15px;
    box-shadow: 0 4px 12px rgba(128, 0, 255, 0.3);
}
.card img { width: 100%; border-radius: 8px; }
.title { font-size: 14px; font-weight: bold; }
.meta { font-size: 12px; color: #cbb6ff; }
.viral {
    display: inline-block;
    background: #6d28d9;
    padding: 3px 8px;
    border-radius: 6px;
    font-size: 10px;
    margin-top: 4px;
}
.watch-btn a {
    display: block;
    text-align: center;
    background: #7c3aed;
    color: #ffffff;
    padding: 8px;
    border-radius: 8px;
    margin-top: 8px;
    text-decoration: none;
    font-size: 13px;
    font-weight: 600;
}
.watch-btn a:hover { background: #6d28d9; }
.notice {
    margin: 48px auto;
    max-width: 640px;
    padding: 16px 20px;
    border-radius: 10px;
    background: rgba(250, 204, 21, 0.12);
    border: 1px solid rgba(250, 204, 21, 0.5);
    color: #fde68a;
    text-align: center;
}
"#;
