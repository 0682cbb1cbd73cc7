use axum::{
    http::{header, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};
use rust_embed::Embed;

#[derive(Embed)]
#[folder = "web/dist"]
struct WebAssets;

/// Serve embedded static files from the frontend build
pub async fn serve_static(uri: Uri) -> Response {
    let path = uri.path().trim_start_matches('/');

    // Try exact path first
    if let Some(content) = <WebAssets as Embed>::get(path) {
        let mime = mime_guess::from_path(path).first_or_octet_stream();
        return (
            StatusCode::OK,
            [(header::CONTENT_TYPE, mime.as_ref())],
            content.data.into_owned(),
        )
            .into_response();
    }

    // For SPA routing, serve index.html for any unmatched route
    if let Some(content) = <WebAssets as Embed>::get("index.html") {
        return Html(String::from_utf8_lossy(&content.data).to_string()).into_response();
    }

    // Fallback: the built-in single-page checker
    Html(FALLBACK_HTML.to_string()).into_response()
}

const FALLBACK_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>PhishGuard</title>
    <script src="https://cdn.tailwindcss.com"></script>
</head>
<body class="bg-gray-900 text-white min-h-screen">
    <div class="container mx-auto px-4 py-8 max-w-3xl">
        <header class="mb-8">
            <h1 class="text-4xl font-bold text-blue-400">PhishGuard</h1>
            <p class="text-gray-400 mt-2">Check whether a URL looks like a phishing site ('Bad') or a legitimate one ('Good').</p>
        </header>

        <div id="model-warning" class="hidden mb-6 bg-yellow-900/50 border border-yellow-600 text-yellow-200 rounded-lg px-4 py-3">
            Model not loaded. Checks will return an error until a model artifact is available.
        </div>

        <!-- Check form -->
        <div class="bg-gray-800 rounded-lg p-6 mb-6">
            <label for="url" class="block text-sm text-gray-400 mb-2">URL to Check</label>
            <div class="flex gap-3">
                <input id="url" type="text" placeholder="Enter URL here..."
                       class="flex-1 bg-gray-700 border border-gray-600 rounded px-3 py-2 font-mono text-sm focus:outline-none focus:border-blue-500">
                <button id="check-btn" class="bg-blue-600 hover:bg-blue-700 text-white font-bold py-2 px-6 rounded">
                    Check
                </button>
            </div>
            <div id="examples" class="mt-4 flex flex-wrap gap-2"></div>
        </div>

        <!-- Result -->
        <div id="result" class="hidden bg-gray-800 rounded-lg p-6 mb-6">
            <h2 class="text-xl font-semibold mb-4">Prediction Result</h2>
            <div id="result-bars" class="space-y-3"></div>
            <div id="result-error" class="hidden bg-red-900/50 border border-red-600 text-red-200 rounded px-4 py-3 font-mono text-sm"></div>
            <p id="result-latency" class="text-gray-500 text-sm mt-3"></p>
        </div>

        <!-- Recent checks -->
        <div class="bg-gray-800 rounded-lg p-6">
            <div class="flex justify-between items-center mb-4">
                <h2 class="text-xl font-semibold">Recent Checks</h2>
                <button id="clear-btn" class="text-sm text-gray-400 hover:text-white">Clear</button>
            </div>
            <div id="history" class="font-mono text-sm space-y-1">
                <div class="text-gray-500">No checks yet.</div>
            </div>
        </div>
    </div>

    <script>
        async function fetchJson(url, options) {
            const res = await fetch(url, options);
            return res.json();
        }

        async function init() {
            try {
                const health = await fetchJson('/api/health');
                if (!health.model_loaded) {
                    document.getElementById('model-warning').classList.remove('hidden');
                }

                const data = await fetchJson('/api/examples');
                const container = document.getElementById('examples');
                data.examples.forEach(example => {
                    const chip = document.createElement('button');
                    chip.className = 'bg-gray-700 hover:bg-gray-600 text-gray-300 text-xs rounded-full px-3 py-1 font-mono';
                    chip.textContent = example;
                    chip.addEventListener('click', () => {
                        document.getElementById('url').value = example;
                        check();
                    });
                    container.appendChild(chip);
                });

                refreshHistory();
            } catch (err) {
                console.error('init failed', err);
            }
        }

        async function check() {
            const url = document.getElementById('url').value;
            try {
                const record = await fetchJson('/api/predict', {
                    method: 'POST',
                    headers: { 'Content-Type': 'application/json' },
                    body: JSON.stringify({ url })
                });
                renderResult(record);
                refreshHistory();
            } catch (err) {
                console.error('check failed', err);
            }
        }

        function renderResult(record) {
            document.getElementById('result').classList.remove('hidden');
            const bars = document.getElementById('result-bars');
            const error = document.getElementById('result-error');
            bars.innerHTML = '';

            if (record.label) {
                error.classList.add('hidden');
                for (const name of ['Good', 'Bad']) {
                    const value = record.scores[name] ?? 0;
                    const color = name === 'Good' ? 'bg-green-500' : 'bg-red-500';
                    const row = document.createElement('div');
                    row.innerHTML = `
                        <div class="flex justify-between text-sm mb-1">
                            <span>${name}</span>
                            <span class="text-gray-400">${(value * 100).toFixed(0)}%</span>
                        </div>
                        <div class="w-full bg-gray-700 rounded h-3">
                            <div class="${color} h-3 rounded" style="width: ${value * 100}%"></div>
                        </div>`;
                    bars.appendChild(row);
                }
            } else {
                const top = Object.entries(record.scores)
                    .sort((a, b) => b[1] - a[1])[0];
                error.textContent = top ? top[0] : 'Error';
                error.classList.remove('hidden');
            }

            document.getElementById('result-latency').textContent =
                `Handled in ${record.latency_ms.toFixed(2)} ms`;
        }

        async function refreshHistory() {
            const records = await fetchJson('/api/history?limit=20');
            const container = document.getElementById('history');
            container.innerHTML = '';
            if (records.length === 0) {
                container.innerHTML = '<div class="text-gray-500">No checks yet.</div>';
                return;
            }
            records.forEach(record => {
                const colors = { Good: 'text-green-400', Bad: 'text-red-400' };
                const label = record.label || 'Error';
                const color = colors[label] || 'text-yellow-400';
                const entry = document.createElement('div');
                entry.className = 'flex justify-between gap-4';
                const urlSpan = document.createElement('span');
                urlSpan.className = 'truncate text-gray-300';
                urlSpan.textContent = record.url || '(empty)';
                const labelSpan = document.createElement('span');
                labelSpan.className = color;
                labelSpan.textContent = label;
                entry.append(urlSpan, labelSpan);
                container.appendChild(entry);
            });
        }

        document.getElementById('check-btn').addEventListener('click', check);
        document.getElementById('url').addEventListener('keydown', (e) => {
            if (e.key === 'Enter') check();
        });
        document.getElementById('clear-btn').addEventListener('click', async () => {
            await fetch('/api/history/reset', { method: 'POST' });
            refreshHistory();
        });

        init();
    </script>
</body>
</html>
"#;
