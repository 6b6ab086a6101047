pub const BASE_STYLE: &str = r#"
@import url('https://fonts.googleapis.com/css2?family=Amarante&family=Playfair+Display:wght@400;700&family=Pinyon+Script&display=swap');
* {
	--charcoal: #1a1a1a;
	--panel: #2a2a2a;
	--sage: #8b9d83;
	--sand: #b5a89a;
	--error: #ef4444;
	box-sizing: border-box;
}
html {
	scroll-behavior: smooth;
}
body {
	margin: 0;
	background-color: var(--charcoal);
	color: white;
	font-family: "Helvetica Neue", Arial, sans-serif;
	font-weight: 300;
	overflow-x: hidden;
}
a {
	color: inherit;
	text-decoration: none;
}
.serif-font {
	font-family: "Playfair Display", serif;
}
.script-font {
	font-family: "Pinyon Script", cursive;
}
.eyebrow {
	color: var(--sand);
	font-size: 11px;
	letter-spacing: 0.3em;
	text-transform: uppercase;
	margin-bottom: 16px;
}
.section {
	padding: 96px 24px;
	max-width: 1152px;
	margin: 0 auto;
}
.section h2 {
	color: var(--sage);
	font-weight: 400;
	font-size: 42px;
	margin: 0 0 24px 0;
}
.outline-button {
	border: 2px solid var(--sand);
	background: transparent;
	color: var(--sand);
	padding: 12px 24px;
	letter-spacing: 0.25em;
	text-transform: uppercase;
	cursor: pointer;
	transition: all 0.5s;
}
.outline-button:hover:not(:disabled) {
	background-color: var(--sand);
	color: var(--charcoal);
}
.outline-button:disabled {
	border-color: #4b5563;
	color: #4b5563;
	cursor: not-allowed;
	opacity: 0.5;
}
"#;
