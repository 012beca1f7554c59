#![allow(dead_code)]

use tracing_subscriber::EnvFilter;

/// Routes crate logs through the test harness; `RUST_LOG=donation_widgets=trace`
/// shows every dispatched listener.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub const DONATION_PAGE: &str = r#"<!DOCTYPE html>
<html lang="pl">
<head>
  <meta charset="UTF-8" />
  <title>Oddaj rzeczy</title>
  <link rel="stylesheet" href="/css/style.css" />
</head>
<body>
  <header class="header--form-page">
    <div class="slogan container container--90">
      <div class="slogan--item">
        <h1>Oddaj rzeczy, których już nie chcesz<br />
          <span class="uppercase">potrzebującym</span>
        </h1>
      </div>
    </div>
  </header>

  <section class="form--steps">
    <div class="form--steps-instructions">
      <div class="form--steps-container">
        <h3>Ważne!</h3>
        <p data-step="1" class="active">
          Uzupełnij szczegóły dotyczące Twoich rzeczy. Dzięki temu będziemy
          wiedzieć komu najlepiej je przekazać.
        </p>
        <p data-step="2">
          Uzupełnij szczegóły dotyczące Twoich rzeczy.
        </p>
        <p data-step="3">
          Wybierz jedną, do której trafi Twoja przesyłka.
        </p>
        <p data-step="4">Podaj adres oraz termin odbioru rzeczy.</p>
      </div>
    </div>

    <div class="form--steps-container">
      <div class="form--steps-counter">Krok <span>1</span>/4</div>

      <form action="/donate" method="post" id="donation-form">
        <!-- STEP 1: class .active is switching steps -->
        <div data-step="1" class="active">
          <h3>Zaznacz co chcesz oddać:</h3>

          <div class="form-group form-group--checkbox">
            <label>
              <input type="checkbox" name="categories" value="1" />
              <span class="checkbox"></span>
              <span class="description">ubrania, które nadają się do ponownego użycia</span>
            </label>
          </div>

          <div class="form-group form-group--checkbox">
            <label>
              <input type="checkbox" name="categories" value="2" />
              <span class="checkbox"></span>
              <span class="description">ubrania, do wyrzucenia</span>
            </label>
          </div>

          <div class="form-group form-group--checkbox">
            <label>
              <input type="checkbox" name="categories" value="3" />
              <span class="checkbox"></span>
              <span class="description">zabawki</span>
            </label>
          </div>

          <div class="form-group form-group--buttons">
            <button type="button" class="btn next-step">Dalej</button>
          </div>
        </div>

        <!-- STEP 2 -->
        <div data-step="2">
          <h3>Podaj liczbę 60l worków, w które spakowałeś/aś rzeczy:</h3>

          <div class="form-group form-group--inline">
            <label>
              Liczba 60l worków:
              <input type="number" name="quantity" step="1" min="1" />
            </label>
          </div>

          <div class="form-group form-group--buttons">
            <button type="button" class="btn prev-step">Wstecz</button>
            <button type="button" class="btn next-step">Dalej</button>
          </div>
        </div>

        <!-- STEP 3 -->
        <div data-step="3">
          <h3>Wybierz organizacje, której chcesz pomóc:</h3>

          <div class="form-group form-group--checkbox">
            <label>
              <input type="radio" name="institution" value="1" />
              <span class="checkbox radio"></span>
              <span class="description">
                <div class="title">Fundacja &quot;Bez domu&quot;</div>
                <div class="subtitle">
                  Cel i misja: Pomoc dla osób nie posiadających miejsca zamieszkania
                </div>
              </span>
            </label>
          </div>

          <div class="form-group form-group--checkbox">
            <label>
              <input type="radio" name="institution" value="2" />
              <span class="checkbox radio"></span>
              <span class="description">
                <div class="title">Fundacja Dla dzieci</div>
                <div class="subtitle">Cel i misja: Pomoc osobom znajdującym się w trudnej sytuacji życiowej.</div>
              </span>
            </label>
          </div>

          <div class="form-group form-group--buttons">
            <button type="button" class="btn prev-step">Wstecz</button>
            <button type="button" class="btn next-step">Dalej</button>
          </div>
        </div>

        <!-- STEP 4 -->
        <div data-step="4">
          <h3>Podaj adres oraz termin odbioru rzecz przez kuriera:</h3>

          <div class="form-section form-section--columns">
            <div class="form-section--column">
              <h4>Adres odbioru</h4>
              <div class="form-group form-group--inline">
                <label> Ulica <input type="text" name="street" /> </label>
              </div>
              <div class="form-group form-group--inline">
                <label> Miasto <input type="text" name="city" /> </label>
              </div>
              <div class="form-group form-group--inline">
                <label> Kod pocztowy <input type="text" name="zipCode" /> </label>
              </div>
              <div class="form-group form-group--inline">
                <label> Numer telefonu <input type="phone" name="phoneNumber" /> </label>
              </div>
            </div>

            <div class="form-section--column">
              <h4>Termin odbioru</h4>
              <div class="form-group form-group--inline">
                <label> Data <input type="date" name="pickUpDate" /> </label>
              </div>
              <div class="form-group form-group--inline">
                <label> Godzina <input type="time" name="pickUpTime" /> </label>
              </div>
              <div class="form-group form-group--inline">
                <label>
                  Uwagi dla kuriera
                  <textarea name="pickUpComment" rows="5"></textarea>
                </label>
              </div>
            </div>
          </div>
          <div class="form-group form-group--buttons">
            <button type="button" class="btn prev-step">Wstecz</button>
            <button type="button" class="btn next-step">Dalej</button>
          </div>
        </div>

        <!-- STEP 5 -->
        <div data-step="5">
          <h3>Podsumowanie Twojej darowizny</h3>

          <div class="summary">
            <div class="form-section">
              <h4>Oddajesz:</h4>
              <ul>
                <li id="summary-bags">
                  <span class="icon icon-bag"></span>
                  <span class="summary--text"></span>
                </li>
                <li id="summary-institution">
                  <span class="icon icon-hand"></span>
                  <span class="summary--text"></span>
                </li>
              </ul>
            </div>

            <div class="form-section form-section--columns">
              <div class="form-section--column">
                <h4>Adres odbioru:</h4>
                <ul>
                  <li id="summary-street"></li>
                  <li id="summary-city"></li>
                  <li id="summary-zip"></li>
                  <li id="summary-phone"></li>
                </ul>
              </div>

              <div class="form-section--column">
                <h4>Termin odbioru:</h4>
                <ul>
                  <li id="summary-date"></li>
                  <li id="summary-hour"></li>
                  <li id="summary-comment"></li>
                </ul>
              </div>
            </div>
          </div>

          <div class="form-group form-group--buttons">
            <button type="button" class="btn prev-step">Wstecz</button>
            <button type="submit" class="btn" id="confirm-donation">Potwierdzam</button>
          </div>
        </div>
      </form>
    </div>
  </section>

  <footer>
    <div class="contact">
      <h2>Skontaktuj się z nami</h2>
    </div>
  </footer>
  <script src="/js/app.js"></script>
</body>
</html>
"#;

pub const SEARCH_PAGE: &str = r#"
<section class="help">
  <form action="/institutions" method="get" id="search">
    <div class="form-group form-group--dropdown">
      <select name="city">
        <option value="waw">Warszawa</option>
        <option value="krk">Kraków</option>
        <option value="gdn">Gdańsk</option>
      </select>
    </div>
    <div class="form-group form-group--dropdown">
      <select name="category">
        <option value="clothes">Ubrania</option>
        <option value="toys">Zabawki</option>
      </select>
    </div>
    <div class="form-group form-group--dropdown" id="empty-host">
      <select name="empty"></select>
    </div>
    <button type="submit" id="search-submit">Szukaj</button>
  </form>
  <p id="outside">Pomagamy od 2018 roku.</p>
</section>
"#;

pub const ADMIN_PAGE: &str = r#"
<header>
  <div class="slogan--item"><h1>Panel Administratora</h1></div>
</header>
<section class="admin-institutions">
  <table>
    <tr>
      <td>Fundacja "Bez domu"</td>
      <td>
        <form action="/admin/institutions/edit" method="get" id="edit-1">
          <input type="hidden" name="id" value="1" />
          <button type="submit" class="btn">Edytuj</button>
        </form>
      </td>
      <td>
        <form class="delete-form" action="/admin/institutions/delete" method="POST" id="delete-1">
          <input type="hidden" name="id" value="1" />
          <button type="submit" class="btn btn--delete">Usuń</button>
        </form>
      </td>
    </tr>
    <tr>
      <td>Fundacja Dla dzieci</td>
      <td>
        <form action="/admin/institutions/edit" method="get" id="edit-2">
          <input type="hidden" name="id" value="2" />
          <button type="submit" class="btn">Edytuj</button>
        </form>
      </td>
      <td>
        <form class="delete-form" action="/admin/institutions/delete" method="POST" id="delete-2">
          <input type="hidden" name="id" value="2" />
          <button type="submit" class="btn btn--delete">Usuń</button>
        </form>
      </td>
    </tr>
  </table>
</section>

<div id="delete-modal" class="modal" style="display: none;">
  <div class="modal-content">
    <p>Czy na pewno chcesz usunąć ten element?</p>
    <button id="confirm-delete" class="btn">Tak, usuń</button>
    <button id="cancel-delete" class="btn">Anuluj</button>
  </div>
</div>
"#;
