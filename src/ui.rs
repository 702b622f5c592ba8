use crate::dates::DayKey;

pub fn render_index(today: DayKey, completed: usize, total: usize) -> String {
    INDEX_HTML
        .replace("{{TODAY}}", &today.to_string())
        .replace("{{DONE}}", &completed.to_string())
        .replace("{{TOTAL}}", &total.to_string())
}

const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Habit Tracker</title>
  <style>
    :root {
      --bg: #f8f3e6;
      --ink: #2b2a28;
      --muted: #6b645d;
      --accent: #ff6b4a;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.9);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: linear-gradient(135deg, var(--bg), #ffe9d4 60%, #f9f2e9 100%);
      color: var(--ink);
      font-family: "Trebuchet MS", sans-serif;
      display: grid;
      place-items: start center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(960px, 100%);
      background: var(--card);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
    }

    header {
      display: flex;
      flex-wrap: wrap;
      justify-content: space-between;
      align-items: center;
      gap: 16px;
    }

    h1 {
      font-family: "Georgia", serif;
      margin: 0;
    }

    .subtitle {
      margin: 4px 0 0;
      color: var(--muted);
    }

    .tabs {
      display: flex;
      gap: 6px;
      padding: 6px;
      background: rgba(47, 72, 88, 0.08);
      border-radius: 999px;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 10px 16px;
      font-weight: 600;
      cursor: pointer;
    }

    .tab {
      background: transparent;
      color: var(--muted);
    }

    .tab.active {
      background: white;
      color: var(--accent-2);
    }

    .add-form {
      display: grid;
      grid-template-columns: 2fr 3fr auto auto;
      gap: 10px;
    }

    input[type="text"] {
      border: 1px solid rgba(47, 72, 88, 0.2);
      border-radius: 12px;
      padding: 10px 12px;
      font-size: 1rem;
    }

    .btn-primary {
      background: var(--accent);
      color: white;
    }

    .grid {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
      gap: 16px;
    }

    .card {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 10px;
    }

    .card-title {
      display: flex;
      align-items: center;
      gap: 8px;
      font-weight: 600;
    }

    .dot {
      width: 12px;
      height: 12px;
      border-radius: 50%;
    }

    .days {
      display: flex;
      gap: 4px;
    }

    .day {
      width: 26px;
      height: 26px;
      border-radius: 6px;
      background: #f3f0ea;
      font-size: 0.75rem;
      display: grid;
      place-items: center;
      color: #9a938b;
    }

    .day.done {
      background: #d6f5e1;
      color: #2d7a4b;
    }

    .day.today {
      outline: 2px solid rgba(47, 72, 88, 0.3);
    }

    .card-actions {
      display: flex;
      gap: 8px;
    }

    .btn-toggle {
      background: var(--accent-2);
      color: white;
      flex: 1;
    }

    .btn-toggle.done {
      background: #2d7a4b;
    }

    .btn-delete {
      background: transparent;
      color: #c63b2b;
    }

    .stat .label {
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #8b857d;
    }

    .stat .value {
      font-size: 1.6rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    .bar {
      height: 8px;
      border-radius: 999px;
      background: #eee8df;
      overflow: hidden;
    }

    .bar > div {
      height: 100%;
      background: var(--accent);
    }

    .overview-row {
      display: flex;
      justify-content: space-between;
      align-items: center;
      padding: 12px 0;
      border-bottom: 1px solid rgba(47, 72, 88, 0.08);
    }

    .empty {
      text-align: center;
      color: var(--muted);
      padding: 36px 0;
    }

    .status {
      min-height: 1.2em;
      color: var(--muted);
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }

    .status[data-type="ok"] {
      color: #2d7a4b;
    }

    [hidden] {
      display: none !important;
    }

    @media (max-width: 700px) {
      .app {
        padding: 24px 18px;
      }
      .add-form {
        grid-template-columns: 1fr;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <div>
        <h1>Habit Tracker</h1>
        <p class="subtitle"><span id="done">{{DONE}}</span> of <span id="total">{{TOTAL}}</span> habits completed today ({{TODAY}})</p>
      </div>
      <div class="tabs" role="tablist">
        <button class="tab active" data-view="habits" type="button">Habits</button>
        <button class="tab" data-view="stats" type="button">Stats</button>
      </div>
    </header>

    <section id="habits-view">
      <form id="add-form" class="add-form" method="post" action="/habits">
        <input type="text" name="name" placeholder="New habit" required />
        <input type="text" name="description" placeholder="Description (optional)" />
        <input type="color" name="color" value="#3b82f6" />
        <button class="btn-primary" type="submit">Add habit</button>
      </form>
      <p id="status" class="status"></p>
      <div id="habit-grid" class="grid"></div>
      <p id="habits-empty" class="empty" hidden>No habits yet. Add your first one above.</p>
    </section>

    <section id="stats-view" hidden>
      <div id="stat-grid" class="grid"></div>
      <div id="overview" class="card"></div>
      <p id="stats-empty" class="empty" hidden>Add some habits to see your progress statistics.</p>
    </section>
  </main>

  <script>
    const statusEl = document.getElementById('status');
    const grid = document.getElementById('habit-grid');

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const escapeHtml = (text) =>
      String(text).replace(/[&<>"']/g, (c) => ({ '&': '&amp;', '<': '&lt;', '>': '&gt;', '"': '&quot;', "'": '&#39;' }[c]));

    const request = async (url, options) => {
      const res = await fetch(url, options);
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }
      return res.json();
    };

    const renderHabits = (habits) => {
      document.getElementById('habits-empty').hidden = habits.length > 0;
      document.getElementById('total').textContent = habits.length;
      document.getElementById('done').textContent = habits.filter((h) => h.completedToday).length;

      grid.innerHTML = habits.map((habit) => `
        <div class="card">
          <div class="card-title">
            <span class="dot" style="background:${escapeHtml(habit.color)}"></span>
            ${escapeHtml(habit.name)}
          </div>
          ${habit.description ? `<div class="subtitle">${escapeHtml(habit.description)}</div>` : ''}
          <div>${habit.streak} day streak</div>
          <div class="days">
            ${habit.lastSevenDays.map((day) => `
              <div class="day ${day.completed ? 'done' : ''} ${day.isToday ? 'today' : ''}" title="${day.date}">
                ${Number(day.date.slice(8))}
              </div>`).join('')}
          </div>
          <div class="card-actions">
            <button class="btn-toggle ${habit.completedToday ? 'done' : ''}" data-toggle="${escapeHtml(habit.id)}" type="button">
              ${habit.completedToday ? 'Completed today' : 'Mark complete'}
            </button>
            <button class="btn-delete" data-delete="${escapeHtml(habit.id)}" type="button">Delete</button>
          </div>
        </div>`).join('');
    };

    const renderStats = (stats) => {
      document.getElementById('stats-empty').hidden = stats.total_habits > 0;
      document.getElementById('stat-grid').hidden = stats.total_habits === 0;
      document.getElementById('overview').hidden = stats.total_habits === 0;

      const cards = [
        ["Today's progress", `${stats.today_completed_count}/${stats.total_habits}`, stats.completion_rate_today],
        ['Weekly rate', `${stats.weekly_rate}%`, stats.weekly_rate],
        ['Longest streak', `${stats.longest_streak} days`, stats.longest_streak_bar],
        ['Total completions', String(stats.total_completions), stats.total_completions_bar],
      ];
      document.getElementById('stat-grid').innerHTML = cards.map(([label, value, pct]) => `
        <div class="card stat">
          <span class="label">${label}</span>
          <span class="value">${value}</span>
          <div class="bar"><div style="width:${pct}%"></div></div>
        </div>`).join('');

      document.getElementById('overview').innerHTML = '<h3>Habits overview</h3>' + stats.habits.map((habit) => `
        <div class="overview-row">
          <div class="card-title">
            <span class="dot" style="background:${escapeHtml(habit.color)}"></span>
            <div>
              <div>${escapeHtml(habit.name)}</div>
              <div class="subtitle">${habit.streak} day streak, ${habit.total_completions} total completions</div>
            </div>
          </div>
          <div><strong>${habit.completion_rate}%</strong> completion rate</div>
        </div>`).join('');
    };

    const refresh = async () => {
      const [habits, stats] = await Promise.all([request('/api/habits'), request('/api/stats')]);
      renderHabits(habits);
      renderStats(stats);
    };

    const afterMutation = async (response) => {
      await refresh();
      if (response && response.saved === false) {
        setStatus('Changes kept for this session but could not be saved to disk.', 'error');
      } else {
        setStatus('Saved', 'ok');
        setTimeout(() => setStatus('', ''), 1200);
      }
    };

    document.getElementById('add-form').addEventListener('submit', (event) => {
      event.preventDefault();
      const form = new FormData(event.target);
      request('/api/habits', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({
          name: form.get('name'),
          description: form.get('description'),
          color: form.get('color'),
        }),
      })
        .then((response) => {
          event.target.reset();
          return afterMutation(response);
        })
        .catch((err) => setStatus(err.message, 'error'));
    });

    grid.addEventListener('click', (event) => {
      const toggleId = event.target.dataset.toggle;
      const deleteId = event.target.dataset.delete;
      if (toggleId) {
        request(`/api/habits/${encodeURIComponent(toggleId)}/toggle`, { method: 'POST' })
          .then(afterMutation)
          .catch((err) => setStatus(err.message, 'error'));
      } else if (deleteId && window.confirm('Are you sure you want to delete this habit?')) {
        request(`/api/habits/${encodeURIComponent(deleteId)}`, { method: 'DELETE' })
          .then(afterMutation)
          .catch((err) => setStatus(err.message, 'error'));
      }
    });

    document.querySelectorAll('.tab').forEach((tab) => {
      tab.addEventListener('click', () => {
        document.querySelectorAll('.tab').forEach((t) => t.classList.toggle('active', t === tab));
        document.getElementById('habits-view').hidden = tab.dataset.view !== 'habits';
        document.getElementById('stats-view').hidden = tab.dataset.view !== 'stats';
      });
    });

    refresh().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"##;
