pub fn render_index(username: &str, date: &str) -> String {
    INDEX_HTML
        .replace("{{USERNAME}}", username)
        .replace("{{DATE}}", date)
}

const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Fitness Tracker</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f6f2fb;
      --bg-2: #ddd0f2;
      --ink: #2a2733;
      --accent: #7c3aed;
      --accent-soft: #ede9fe;
      --accent-2: #3d3654;
      --danger: #dc2626;
      --ok: #16a34a;
      --card: rgba(255, 255, 255, 0.9);
      --shadow: 0 24px 60px rgba(61, 54, 84, 0.16);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #f1e7fb 60%, #f8f4fc 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: start center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(920px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 24px;
      animation: rise 600ms ease;
    }

    header {
      display: flex;
      flex-wrap: wrap;
      align-items: baseline;
      justify-content: space-between;
      gap: 6px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(1.8rem, 4vw, 2.6rem);
      margin: 0;
    }

    .subtitle {
      margin: 0;
      color: #6b6477;
      font-size: 1rem;
    }

    .tabs {
      display: flex;
      flex-wrap: wrap;
      gap: 6px;
      padding: 6px;
      background: rgba(61, 54, 84, 0.08);
      border-radius: 999px;
    }

    .tab {
      background: transparent;
      border: none;
      border-radius: 999px;
      padding: 8px 14px;
      font-size: 0.9rem;
      font-weight: 600;
      color: #6b645d;
      cursor: pointer;
      box-shadow: none;
    }

    .tab.active {
      background: white;
      color: var(--accent);
      box-shadow: 0 8px 16px rgba(61, 54, 84, 0.12);
    }

    .panel {
      display: none;
      gap: 20px;
    }

    .panel.active {
      display: grid;
    }

    .stat-row {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(150px, 1fr));
      gap: 14px;
    }

    .stat {
      background: white;
      border-radius: 18px;
      padding: 16px;
      border: 1px solid rgba(61, 54, 84, 0.08);
      display: grid;
      gap: 6px;
    }

    .stat .label {
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #8b857d;
    }

    .stat .value {
      font-size: 1.5rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    .stat .value.accent {
      color: var(--accent);
    }

    .card {
      background: white;
      border-radius: 20px;
      padding: 20px;
      border: 1px solid rgba(61, 54, 84, 0.08);
      display: grid;
      gap: 12px;
    }

    .card h2 {
      margin: 0;
      font-size: 1.2rem;
      color: var(--accent);
    }

    .meal-item {
      display: flex;
      align-items: center;
      gap: 10px;
      padding: 8px 0;
      border-bottom: 1px dashed rgba(61, 54, 84, 0.12);
    }

    .meal-item .name {
      flex: 1;
    }

    .meal-item .kcal {
      color: #6b6477;
      font-size: 0.9rem;
    }

    .meal-empty {
      color: #9a93a6;
      font-size: 0.9rem;
      font-style: italic;
    }

    form.inline {
      display: flex;
      flex-wrap: wrap;
      gap: 8px;
      align-items: center;
    }

    input, select {
      font: inherit;
      padding: 9px 12px;
      border-radius: 10px;
      border: 1px solid rgba(61, 54, 84, 0.2);
      background: white;
      min-width: 0;
    }

    input.num {
      width: 92px;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 10px 18px;
      font-size: 0.95rem;
      font-weight: 600;
      cursor: pointer;
      transition: transform 150ms ease, box-shadow 150ms ease;
      display: inline-flex;
      align-items: center;
      justify-content: center;
      gap: 8px;
    }

    button:active {
      transform: scale(0.98);
    }

    button:disabled {
      opacity: 0.4;
      cursor: default;
    }

    .btn-primary {
      background: var(--accent);
      color: white;
      box-shadow: 0 10px 24px rgba(124, 58, 237, 0.3);
    }

    .btn-danger {
      background: var(--danger);
      color: white;
      box-shadow: 0 10px 24px rgba(220, 38, 38, 0.25);
    }

    .btn-ghost {
      background: var(--accent-soft);
      color: var(--accent);
    }

    .btn-trash {
      background: transparent;
      color: var(--danger);
      padding: 4px 8px;
      font-size: 1rem;
    }

    .bar {
      width: 100%;
      height: 14px;
      border-radius: 999px;
      background: rgba(61, 54, 84, 0.1);
      overflow: hidden;
    }

    .bar span {
      display: block;
      height: 100%;
      border-radius: 999px;
      background: var(--accent);
      transition: width 300ms ease;
    }

    .bar-text {
      font-size: 0.85rem;
      color: #6b6477;
    }

    table {
      width: 100%;
      border-collapse: collapse;
    }

    th, td {
      text-align: left;
      padding: 8px 10px;
      border-bottom: 1px solid rgba(61, 54, 84, 0.1);
    }

    th:last-child, td:last-child {
      text-align: right;
    }

    .glass-count {
      font-size: 2.4rem;
      font-weight: 600;
      text-align: center;
    }

    .glass-controls {
      display: flex;
      justify-content: center;
      gap: 16px;
    }

    .reminder-list {
      display: flex;
      flex-wrap: wrap;
      gap: 8px;
    }

    .reminder-list span {
      background: var(--accent-soft);
      color: var(--accent);
      border-radius: 999px;
      padding: 6px 12px;
      font-size: 0.85rem;
      font-weight: 600;
    }

    .field {
      display: grid;
      gap: 6px;
    }

    .field label {
      font-size: 0.85rem;
      font-weight: 600;
      color: #6b6477;
    }

    .status {
      font-size: 0.95rem;
      color: #6b645d;
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }

    .status[data-type="ok"] {
      color: #2d7a4b;
    }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translateY(18px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }

    @media (max-width: 640px) {
      .app {
        padding: 26px 20px;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1 id="welcome">Welcome Back, {{USERNAME}}!</h1>
      <p class="subtitle">{{DATE}}</p>
    </header>

    <nav class="tabs" role="tablist">
      <button class="tab active" type="button" data-tab="home" role="tab" aria-selected="true">Home</button>
      <button class="tab" type="button" data-tab="nutrition" role="tab" aria-selected="false">Nutrition</button>
      <button class="tab" type="button" data-tab="progress" role="tab" aria-selected="false">Progress</button>
      <button class="tab" type="button" data-tab="sleep" role="tab" aria-selected="false">Sleep</button>
      <button class="tab" type="button" data-tab="hydration" role="tab" aria-selected="false">Hydration</button>
      <button class="tab" type="button" data-tab="leaderboard" role="tab" aria-selected="false">Leaderboard</button>
      <button class="tab" type="button" data-tab="profile" role="tab" aria-selected="false">Profile</button>
    </nav>

    <section class="panel active" data-panel="home">
      <div class="card">
        <h2>Nutrition</h2>
        <div class="stat-row">
          <div class="stat"><span class="label">Calories</span><span class="value" id="home-calories">0</span></div>
          <div class="stat"><span class="label">Protein</span><span class="value" id="home-protein">0</span></div>
          <div class="stat"><span class="label">Carbs</span><span class="value" id="home-carbs">0</span></div>
          <div class="stat"><span class="label">Fats</span><span class="value" id="home-fats">0</span></div>
        </div>
      </div>
      <div class="card">
        <h2>Body Stats</h2>
        <div class="stat-row">
          <div class="stat"><span class="label">Weight</span><span class="value" id="home-weight">--</span></div>
          <div class="stat"><span class="label">Height</span><span class="value" id="home-height">N/A</span></div>
        </div>
      </div>
    </section>

    <section class="panel" data-panel="nutrition">
      <div class="stat-row">
        <div class="stat"><span class="label">Calories</span><span class="value accent" id="total-calories">0</span></div>
        <div class="stat"><span class="label">Protein</span><span class="value accent" id="total-protein">0</span></div>
        <div class="stat"><span class="label">Carbs</span><span class="value accent" id="total-carbs">0</span></div>
        <div class="stat"><span class="label">Fats</span><span class="value accent" id="total-fats">0</span></div>
      </div>

      <div class="card" data-meal="breakfast">
        <h2>Breakfast</h2>
        <div class="meal-list"></div>
      </div>
      <div class="card" data-meal="lunch">
        <h2>Lunch</h2>
        <div class="meal-list"></div>
      </div>
      <div class="card" data-meal="dinner">
        <h2>Dinner</h2>
        <div class="meal-list"></div>
      </div>

      <div class="card">
        <h2>Add Food</h2>
        <form class="inline" id="food-form">
          <select id="food-meal">
            <option value="breakfast">Breakfast</option>
            <option value="lunch">Lunch</option>
            <option value="dinner">Dinner</option>
          </select>
          <input id="food-name" placeholder="Name" />
          <input id="food-calories" class="num" placeholder="Calories" inputmode="numeric" />
          <input id="food-protein" class="num" placeholder="Protein" inputmode="numeric" />
          <input id="food-carbs" class="num" placeholder="Carbs" inputmode="numeric" />
          <input id="food-fats" class="num" placeholder="Fats" inputmode="numeric" />
          <button class="btn-primary" type="submit">Add Food</button>
        </form>
      </div>

      <button class="btn-danger" id="nutrition-reset" type="button">Reset</button>
    </section>

    <section class="panel" data-panel="progress">
      <div class="card">
        <h2>Calorie Progress</h2>
        <div class="bar"><span id="calorie-bar" style="width: 0%"></span></div>
        <span class="bar-text" id="calorie-text">0/2000 kcal</span>
      </div>
      <div class="card">
        <h2>Weight Progress</h2>
        <div class="bar"><span id="weight-bar" style="width: 0%"></span></div>
        <span class="bar-text" id="weight-text">--</span>
      </div>
      <div class="card">
        <h2>Edit Goals</h2>
        <form class="inline" id="goals-form">
          <div class="field">
            <label for="goal-calories">Daily calorie goal</label>
            <input id="goal-calories" class="num" inputmode="numeric" />
          </div>
          <div class="field">
            <label for="goal-weight">Weight goal</label>
            <input id="goal-weight" class="num" inputmode="decimal" />
          </div>
          <button class="btn-primary" type="submit">Save</button>
        </form>
      </div>
    </section>

    <section class="panel" data-panel="sleep">
      <div class="card">
        <h2>Log Sleep</h2>
        <form class="inline" id="sleep-form">
          <div class="field">
            <label for="sleep-date">Date</label>
            <input id="sleep-date" type="date" />
          </div>
          <div class="field">
            <label for="sleep-hours">Hours slept</label>
            <input id="sleep-hours" class="num" inputmode="decimal" placeholder="7.5" />
          </div>
          <button class="btn-primary" type="submit">Add Entry</button>
        </form>
      </div>
      <div class="card">
        <h2>Sleep Log</h2>
        <div id="sleep-list"></div>
      </div>
      <button class="btn-danger" id="sleep-reset" type="button">Reset Log</button>
    </section>

    <section class="panel" data-panel="hydration">
      <div class="card">
        <h2>How much have you drank today?</h2>
        <div class="glass-count"><span id="glass-count">0</span> glass</div>
        <div class="glass-controls">
          <button class="btn-ghost" id="glass-sub" type="button">-</button>
          <button class="btn-primary" id="glass-add" type="button">+</button>
        </div>
      </div>
      <div class="card">
        <h2>Daily Reminders</h2>
        <p class="subtitle" id="reminder-text"></p>
        <div class="reminder-list" id="reminder-list"></div>
      </div>
    </section>

    <section class="panel" data-panel="leaderboard">
      <div class="card">
        <h2>Leaderboard</h2>
        <table>
          <thead>
            <tr><th>Name</th><th>Weight Max</th></tr>
          </thead>
          <tbody id="leaderboard-body"></tbody>
        </table>
      </div>
    </section>

    <section class="panel" data-panel="profile">
      <div class="card">
        <h2>Profile</h2>
        <form class="inline" id="profile-form">
          <div class="field">
            <label for="profile-username">Username</label>
            <input id="profile-username" />
          </div>
          <div class="field">
            <label for="profile-weight">Weight</label>
            <input id="profile-weight" class="num" inputmode="decimal" />
          </div>
          <div class="field">
            <label for="profile-height">Height (cm)</label>
            <input id="profile-height" class="num" inputmode="numeric" />
          </div>
          <div class="field">
            <label for="profile-birthday">Birthday</label>
            <input id="profile-birthday" type="date" />
          </div>
          <div class="field">
            <label for="profile-kg">Use kilograms</label>
            <input id="profile-kg" type="checkbox" checked />
          </div>
          <button class="btn-primary" type="submit">Save</button>
        </form>
        <p class="subtitle" id="profile-age"></p>
      </div>
    </section>

    <div class="status" id="status"></div>
  </main>

  <script>
    const statusEl = document.getElementById('status');
    const tabs = Array.from(document.querySelectorAll('.tab'));
    const panels = Array.from(document.querySelectorAll('.panel'));

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
      if (type === 'ok') {
        setTimeout(() => { statusEl.textContent = ''; statusEl.dataset.type = ''; }, 1200);
      }
    };

    const getJSON = async (url) => {
      const res = await fetch(url);
      if (!res.ok) {
        throw new Error(await res.text() || 'Request failed');
      }
      return res.json();
    };

    const postJSON = async (url, body) => {
      const res = await fetch(url, {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify(body || {})
      });
      if (!res.ok) {
        throw new Error(await res.text() || 'Request failed');
      }
      return res.json();
    };

    const setActiveTab = (tab) => {
      tabs.forEach((button) => {
        const isActive = button.dataset.tab === tab;
        button.classList.toggle('active', isActive);
        button.setAttribute('aria-selected', String(isActive));
      });
      panels.forEach((panel) => {
        panel.classList.toggle('active', panel.dataset.panel === tab);
      });
    };

    tabs.forEach((button) => {
      button.addEventListener('click', () => setActiveTab(button.dataset.tab));
    });

    // --- home ---

    const renderSummary = (summary) => {
      document.getElementById('welcome').textContent = 'Welcome Back, ' + (summary.username || 'User') + '!';
      document.getElementById('home-calories').textContent = summary.totals.calories + ' kcal';
      document.getElementById('home-protein').textContent = summary.totals.protein + ' g';
      document.getElementById('home-carbs').textContent = summary.totals.carbs + ' g';
      document.getElementById('home-fats').textContent = summary.totals.fats + ' g';
      document.getElementById('home-weight').textContent = summary.weight;
      document.getElementById('home-height').textContent = summary.height;
    };

    const loadSummary = () => getJSON('/api/summary').then(renderSummary);

    // --- nutrition ---

    const mealCards = Array.from(document.querySelectorAll('.card[data-meal]'));

    const renderNutrition = (nutrition) => {
      document.getElementById('total-calories').textContent = nutrition.totals.calories;
      document.getElementById('total-protein').textContent = nutrition.totals.protein;
      document.getElementById('total-carbs').textContent = nutrition.totals.carbs;
      document.getElementById('total-fats').textContent = nutrition.totals.fats;

      mealCards.forEach((card) => {
        const meal = card.dataset.meal;
        const list = card.querySelector('.meal-list');
        list.innerHTML = '';
        const items = nutrition[meal] || [];
        if (!items.length) {
          const empty = document.createElement('div');
          empty.className = 'meal-empty';
          empty.textContent = 'Nothing logged yet.';
          list.appendChild(empty);
          return;
        }
        items.forEach((item) => {
          const row = document.createElement('div');
          row.className = 'meal-item';

          const name = document.createElement('span');
          name.className = 'name';
          name.textContent = item.name;

          const kcal = document.createElement('span');
          kcal.className = 'kcal';
          kcal.textContent = item.calories + ' kcal';

          const trash = document.createElement('button');
          trash.type = 'button';
          trash.className = 'btn-trash';
          trash.textContent = 'x';
          trash.addEventListener('click', () => {
            postJSON('/api/nutrition/remove', { meal, id: item.id })
              .then((updated) => { renderNutrition(updated); loadSummary(); loadProgress(); })
              .catch((err) => setStatus(err.message, 'error'));
          });

          row.appendChild(name);
          row.appendChild(kcal);
          row.appendChild(trash);
          list.appendChild(row);
        });
      });
    };

    const loadNutrition = () => getJSON('/api/nutrition').then(renderNutrition);

    document.getElementById('food-form').addEventListener('submit', (event) => {
      event.preventDefault();
      const payload = {
        meal: document.getElementById('food-meal').value,
        name: document.getElementById('food-name').value,
        calories: document.getElementById('food-calories').value,
        protein: document.getElementById('food-protein').value,
        carbs: document.getElementById('food-carbs').value,
        fats: document.getElementById('food-fats').value
      };
      postJSON('/api/nutrition/food', payload)
        .then((updated) => {
          // Only a successful add clears the form; rejected input stays put.
          ['food-name', 'food-calories', 'food-protein', 'food-carbs', 'food-fats']
            .forEach((id) => { document.getElementById(id).value = ''; });
          renderNutrition(updated);
          loadSummary();
          loadProgress();
          setStatus('Saved', 'ok');
        })
        .catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('nutrition-reset').addEventListener('click', () => {
      postJSON('/api/nutrition/reset')
        .then((updated) => { renderNutrition(updated); loadSummary(); loadProgress(); })
        .catch((err) => setStatus(err.message, 'error'));
    });

    // --- progress ---

    const renderProgress = (progress) => {
      const caloriePct = Math.min(progress.calorie_progress, 1) * 100;
      const weightPct = Math.min(progress.weight_progress, 1) * 100;
      document.getElementById('calorie-bar').style.width = caloriePct + '%';
      document.getElementById('weight-bar').style.width = weightPct + '%';
      document.getElementById('calorie-text').textContent =
        progress.total_calories + '/' + progress.calorie_goal + ' kcal';
      document.getElementById('weight-text').textContent =
        progress.current_weight.toFixed(1) + ' kg -> ' + progress.weight_goal.toFixed(1) + ' kg';
    };

    const loadProgress = () => getJSON('/api/progress').then(renderProgress);

    document.getElementById('goals-form').addEventListener('submit', (event) => {
      event.preventDefault();
      const payload = {
        calorie_goal: document.getElementById('goal-calories').value,
        weight_goal: document.getElementById('goal-weight').value
      };
      postJSON('/api/goals', payload)
        .then((progress) => { renderProgress(progress); setStatus('Saved', 'ok'); })
        .catch((err) => setStatus(err.message, 'error'));
    });

    // --- sleep ---

    const renderSleep = (sleep) => {
      const list = document.getElementById('sleep-list');
      list.innerHTML = '';
      if (!sleep.entries.length) {
        const empty = document.createElement('div');
        empty.className = 'meal-empty';
        empty.textContent = 'No entries yet.';
        list.appendChild(empty);
        return;
      }
      sleep.entries.forEach((entry) => {
        const row = document.createElement('div');
        row.className = 'meal-item';

        const date = document.createElement('span');
        date.className = 'name';
        date.textContent = entry.date;

        const hours = document.createElement('span');
        hours.className = 'kcal';
        hours.textContent = entry.hours.toFixed(1) + ' hours';

        row.appendChild(date);
        row.appendChild(hours);
        list.appendChild(row);
      });
    };

    const loadSleep = () => getJSON('/api/sleep').then(renderSleep);

    document.getElementById('sleep-form').addEventListener('submit', (event) => {
      event.preventDefault();
      const payload = {
        date: document.getElementById('sleep-date').value || null,
        hours: document.getElementById('sleep-hours').value
      };
      postJSON('/api/sleep', payload)
        .then((sleep) => {
          document.getElementById('sleep-hours').value = '';
          renderSleep(sleep);
          setStatus('Saved', 'ok');
        })
        .catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('sleep-reset').addEventListener('click', () => {
      postJSON('/api/sleep/reset')
        .then(renderSleep)
        .catch((err) => setStatus(err.message, 'error'));
    });

    // --- hydration ---

    const renderHydration = (hydration) => {
      document.getElementById('glass-count').textContent = hydration.glasses;
      document.getElementById('glass-sub').disabled = hydration.glasses === 0;
    };

    const loadHydration = () => getJSON('/api/hydration').then(renderHydration);

    const hydrate = (action) => {
      postJSON('/api/hydration', { action })
        .then(renderHydration)
        .catch((err) => setStatus(err.message, 'error'));
    };

    document.getElementById('glass-add').addEventListener('click', () => hydrate('add'));
    document.getElementById('glass-sub').addEventListener('click', () => hydrate('sub'));

    const loadReminders = () => getJSON('/api/hydration/reminders').then((plan) => {
      document.getElementById('reminder-text').textContent = plan.title + ': ' + plan.body;
      const list = document.getElementById('reminder-list');
      list.innerHTML = '';
      plan.times.forEach((time) => {
        const chip = document.createElement('span');
        chip.textContent = time;
        list.appendChild(chip);
      });
    });

    // --- leaderboard ---

    const loadLeaderboard = () => getJSON('/api/leaderboard').then((roster) => {
      const body = document.getElementById('leaderboard-body');
      body.innerHTML = '';
      roster.forEach((person, index) => {
        const row = document.createElement('tr');
        const name = document.createElement('td');
        name.textContent = (index + 1) + '. ' + person.username;
        const count = document.createElement('td');
        count.textContent = person.count;
        row.appendChild(name);
        row.appendChild(count);
        body.appendChild(row);
      });
    });

    // --- profile ---

    const renderProfile = (profile) => {
      document.getElementById('profile-username').value = profile.username;
      document.getElementById('profile-weight').value = profile.current_weight.toFixed(1);
      document.getElementById('profile-height').value = profile.height_cm;
      document.getElementById('profile-birthday').value = profile.birthday || '';
      document.getElementById('profile-kg').checked = profile.use_kilograms;
      document.getElementById('profile-age').textContent =
        profile.age_years === null ? '' : 'Age: ' + profile.age_years + ' years';
    };

    const loadProfile = () => getJSON('/api/profile').then(renderProfile);

    document.getElementById('profile-form').addEventListener('submit', (event) => {
      event.preventDefault();
      const payload = {
        username: document.getElementById('profile-username').value,
        current_weight: document.getElementById('profile-weight').value,
        height_cm: document.getElementById('profile-height').value,
        birthday: document.getElementById('profile-birthday').value || null,
        use_kilograms: document.getElementById('profile-kg').checked
      };
      postJSON('/api/profile', payload)
        .then((profile) => {
          renderProfile(profile);
          loadSummary();
          loadProgress();
          setStatus('Saved', 'ok');
        })
        .catch((err) => setStatus(err.message, 'error'));
    });

    const refresh = () => Promise.all([
      loadSummary(),
      loadNutrition(),
      loadProgress(),
      loadSleep(),
      loadHydration(),
      loadReminders(),
      loadLeaderboard(),
      loadProfile()
    ]);

    refresh().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"##;
